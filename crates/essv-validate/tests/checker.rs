//! Convention checker facade: attribute-key driven filename checks.

use essv_model::{TermProperty, TermSpec, VocabularyStore};
use essv_validate::{
    AttributeStatus, ConfigError, ConventionChecker, ParseError, TemplateError, TemplateOptions,
};

fn fixture_store() -> VocabularyStore {
    let mut store = VocabularyStore::new();
    store
        .create_authority("eustace-team", "EUSTACE team", None, None)
        .unwrap();
    store
        .create_scope("eustace-team", "eustace", "EUSTACE", None)
        .unwrap();
    store
        .create_collection(
            "eustace-team",
            "eustace",
            "institution-id",
            "Institution ID",
            None,
        )
        .unwrap();
    store
        .create_collection("eustace-team", "eustace", "frequency", "Frequency", None)
        .unwrap();
    store
        .create_term(
            "eustace-team",
            "eustace",
            "institution-id",
            TermSpec::new("mohc", "MOHC"),
        )
        .unwrap();
    store
        .create_term(
            "eustace-team",
            "eustace",
            "frequency",
            TermSpec::new("day", "Daily"),
        )
        .unwrap();
    store
}

#[test]
fn file_name_with_resolvable_fields_passes() {
    let store = fixture_store();
    let checker = ConventionChecker::new(&store, "eustace-team", "eustace").unwrap();

    let canonical = checker
        .check_file_name(
            "mohc_day.nc",
            &["institution_id", "frequency"],
            TemplateOptions::default(),
        )
        .unwrap();
    assert_eq!(canonical, "mohc_day.nc");
}

#[test]
fn file_name_with_unknown_institution_fails() {
    let store = fixture_store();
    let checker = ConventionChecker::new(&store, "eustace-team", "eustace").unwrap();

    let err = checker
        .check_file_name(
            "NOAA_day.nc",
            &["institution_id", "frequency"],
            TemplateOptions::default(),
        )
        .unwrap_err();
    match err {
        ParseError::Template(TemplateError::Field {
            filename,
            position,
            collection,
            ..
        }) => {
            assert_eq!(filename, "NOAA_day.nc");
            assert_eq!(position, 0);
            assert_eq!(collection, "institution-id");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_key_is_a_configuration_error() {
    let store = fixture_store();
    let checker = ConventionChecker::new(&store, "eustace-team", "eustace").unwrap();

    let err = checker
        .check_file_name(
            "mohc_day.nc",
            &["institution_id", "grid_label"],
            TemplateOptions::default(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        ParseError::Config(ConfigError::UnknownCollection { .. })
    ));
}

#[test]
fn checker_also_answers_attribute_checks() {
    let store = fixture_store();
    let checker = ConventionChecker::new(&store, "eustace-team", "eustace").unwrap();

    assert_eq!(
        checker
            .check_attribute("institution_id", Some("MOHC"), TermProperty::Label)
            .unwrap(),
        AttributeStatus::Valid
    );
    assert_eq!(
        checker
            .check_attribute("frequency", Some("weekly"), TermProperty::Name)
            .unwrap(),
        AttributeStatus::Unrecognized
    );
    assert_eq!(
        checker
            .check_attribute("source", None, TermProperty::Label)
            .unwrap(),
        AttributeStatus::Absent
    );
}

#[test]
fn missing_scope_fails_at_binding_time() {
    let store = fixture_store();
    assert!(ConventionChecker::new(&store, "eustace-team", "cmip6").is_err());
}
