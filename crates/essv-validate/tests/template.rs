//! Template parser behaviour: arity, field resolution, date ranges,
//! canonical reconstruction.

use essv_model::{TermSpec, VocabularyStore};
use essv_validate::{ConfigError, ParseError, TemplateError, TemplateOptions, TemplateParser};

fn fixture_store() -> VocabularyStore {
    let mut store = VocabularyStore::new();
    store.create_authority("wcrp", "WCRP", None, None).unwrap();
    store.create_scope("wcrp", "cmip6", "CMIP6", None).unwrap();
    store
        .create_collection("wcrp", "cmip6", "institution-id", "Institution ID", None)
        .unwrap();
    store
        .create_collection("wcrp", "cmip6", "frequency", "Frequency", None)
        .unwrap();
    store
        .create_collection("wcrp", "cmip6", "variable-id", "Variable ID", None)
        .unwrap();

    store
        .create_term(
            "wcrp",
            "cmip6",
            "institution-id",
            TermSpec::new("mohc", "MOHC").with_synonyms(["UKMO"]),
        )
        .unwrap();
    store
        .create_term(
            "wcrp",
            "cmip6",
            "institution-id",
            TermSpec::new("ipsl", "IPSL"),
        )
        .unwrap();
    for (name, label) in [
        ("day", "Daily"),
        ("mon", "Monthly"),
        ("monclim", "Monthly climatology"),
        ("yr", "Yearly"),
        ("decadal", "Decadal"),
    ] {
        store
            .create_term("wcrp", "cmip6", "frequency", TermSpec::new(name, label))
            .unwrap();
    }
    for (name, label) in [("tas", "Near-surface air temperature"), ("pr", "Precipitation")] {
        store
            .create_term("wcrp", "cmip6", "variable-id", TermSpec::new(name, label))
            .unwrap();
    }
    store
}

#[test]
fn placeholder_count_must_match_collections() {
    let store = fixture_store();
    let institutions = store
        .get_collection("wcrp", "cmip6", "institution-id")
        .unwrap();
    let err = TemplateParser::create("{}_{}.nc", vec![institutions], TemplateOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::PlaceholderMismatch {
            placeholders: 2,
            collections: 1,
            ..
        }
    ));
}

#[test]
fn synonym_and_case_fields_resolve_to_canonical_filename() {
    let store = fixture_store();
    let parser = TemplateParser::create(
        "{}_{}.nc",
        vec![
            store
                .get_collection("wcrp", "cmip6", "institution-id")
                .unwrap(),
            store.get_collection("wcrp", "cmip6", "frequency").unwrap(),
        ],
        TemplateOptions::default(),
    )
    .unwrap();

    assert_eq!(parser.parse("mohc_day.nc").unwrap(), "mohc_day.nc");
    // Case variants and registered synonyms rewrite to canonical form.
    assert_eq!(parser.parse("MoHC_Day.nc").unwrap(), "mohc_day.nc");
    assert_eq!(parser.parse("UKMO_day.nc").unwrap(), "mohc_day.nc");
}

#[test]
fn unresolved_field_names_position_and_collection() {
    let store = fixture_store();
    let parser = TemplateParser::create(
        "{}_{}.nc",
        vec![
            store
                .get_collection("wcrp", "cmip6", "institution-id")
                .unwrap(),
            store.get_collection("wcrp", "cmip6", "frequency").unwrap(),
        ],
        TemplateOptions::default(),
    )
    .unwrap();

    let err = parser.parse("noaa-gfdl_day.nc").unwrap_err();
    match err {
        ParseError::Template(TemplateError::Field {
            filename,
            position,
            value,
            collection,
        }) => {
            assert_eq!(filename, "noaa-gfdl_day.nc");
            assert_eq!(position, 0);
            assert_eq!(value, "noaa-gfdl");
            assert_eq!(collection, "institution-id");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn wrong_extension_rejected() {
    let store = fixture_store();
    let parser = TemplateParser::create(
        "{}.nc",
        vec![store.get_collection("wcrp", "cmip6", "frequency").unwrap()],
        TemplateOptions::default(),
    )
    .unwrap();

    let err = parser.parse("day.txt").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Template(TemplateError::Extension { .. })
    ));
}

#[test]
fn extra_field_rejected_without_date_range_policy() {
    let store = fixture_store();
    let parser = TemplateParser::create(
        "{}_{}.nc",
        vec![
            store
                .get_collection("wcrp", "cmip6", "institution-id")
                .unwrap(),
            store.get_collection("wcrp", "cmip6", "frequency").unwrap(),
        ],
        TemplateOptions::default(),
    )
    .unwrap();

    let err = parser.parse("mohc_mon_202101-202112.nc").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Template(TemplateError::FieldCount {
            expected: 2,
            found: 3,
            ..
        })
    ));
}

#[test]
fn date_range_policy_requires_frequency_collection() {
    let store = fixture_store();
    let err = TemplateParser::create(
        "{}.nc",
        vec![
            store
                .get_collection("wcrp", "cmip6", "institution-id")
                .unwrap(),
        ],
        TemplateOptions::default().with_date_range(),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::MissingFrequencyField));
}

#[test]
fn monthly_date_range_needs_six_digit_dates() {
    let store = fixture_store();
    let parser = TemplateParser::create(
        "{}_{}_{}.nc",
        vec![
            store.get_collection("wcrp", "cmip6", "variable-id").unwrap(),
            store
                .get_collection("wcrp", "cmip6", "institution-id")
                .unwrap(),
            store.get_collection("wcrp", "cmip6", "frequency").unwrap(),
        ],
        TemplateOptions::default().with_date_range(),
    )
    .unwrap();

    // No trailing field at all is still fine.
    assert_eq!(parser.parse("tas_mohc_mon.nc").unwrap(), "tas_mohc_mon.nc");

    assert_eq!(
        parser.parse("tas_mohc_mon_202101-202101.nc").unwrap(),
        "tas_mohc_mon_202101-202101.nc"
    );

    let err = parser.parse("tas_mohc_mon_2021-2021.nc").unwrap_err();
    match err {
        ParseError::Template(TemplateError::DateRange {
            value, expected, ..
        }) => {
            assert_eq!(value, "2021-2021");
            assert_eq!(expected, "yyyyMM-yyyyMM");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn yearly_date_range_needs_four_digit_dates() {
    let store = fixture_store();
    let parser = TemplateParser::create(
        "{}_{}.nc",
        vec![
            store
                .get_collection("wcrp", "cmip6", "institution-id")
                .unwrap(),
            store.get_collection("wcrp", "cmip6", "frequency").unwrap(),
        ],
        TemplateOptions::default().with_date_range(),
    )
    .unwrap();

    assert_eq!(
        parser.parse("mohc_yr_2016-2100.nc").unwrap(),
        "mohc_yr_2016-2100.nc"
    );
    assert!(parser.parse("mohc_yr_201601-210012.nc").is_err());
    assert_eq!(
        parser.parse("mohc_decadal_2010-2020.nc").unwrap(),
        "mohc_decadal_2010-2020.nc"
    );
}

#[test]
fn unsupported_frequency_with_date_range_is_a_config_gap() {
    let store = fixture_store();
    let parser = TemplateParser::create(
        "{}_{}.nc",
        vec![
            store
                .get_collection("wcrp", "cmip6", "institution-id")
                .unwrap(),
            store.get_collection("wcrp", "cmip6", "frequency").unwrap(),
        ],
        TemplateOptions::default().with_date_range(),
    )
    .unwrap();

    let err = parser.parse("mohc_day_2016-2100.nc").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Config(ConfigError::UnsupportedFrequency { .. })
    ));
    // Without the trailing field the same frequency is fine.
    assert_eq!(parser.parse("mohc_day.nc").unwrap(), "mohc_day.nc");
}

#[test]
fn parse_is_a_fixed_point_on_its_own_output() {
    let store = fixture_store();
    let parser = TemplateParser::create(
        "{}_{}.nc",
        vec![
            store
                .get_collection("wcrp", "cmip6", "institution-id")
                .unwrap(),
            store.get_collection("wcrp", "cmip6", "frequency").unwrap(),
        ],
        TemplateOptions::default().with_date_range(),
    )
    .unwrap();

    let canonical = parser.parse("UKMO_Mon_202101-202112.nc").unwrap();
    assert_eq!(canonical, "mohc_mon_202101-202112.nc");
    assert_eq!(parser.parse(&canonical).unwrap(), canonical);
}
