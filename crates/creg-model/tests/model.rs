use creg_model::{Catalog, CreditBand, OverflowPolicy, ValidationOptions};

const CATALOG_JSON: &str = r#"{
  "student": {
    "name": "Ahmad Faris",
    "role": "Undergraduate",
    "minCredits": 12,
    "maxCredits": 18
  },
  "availableCourses": [
    {
      "code": "BIC10204",
      "name": "Algorithm and Programming",
      "credits": 4,
      "lecturer": "Dr. Rahman",
      "schedule": "Mon 08:00-10:00",
      "type": "Core",
      "section": "1"
    },
    {
      "code": "UQI10102",
      "name": "Islamic Civilization",
      "credits": 2,
      "lecturer": "Ust. Hakim",
      "schedule": "Wed 14:00-16:00",
      "type": "University",
      "section": "3"
    }
  ]
}"#;

#[test]
fn catalog_document_parses() {
    let catalog: Catalog = serde_json::from_str(CATALOG_JSON).expect("parse catalog");
    assert_eq!(catalog.len(), 2);
    let student = catalog.student.as_ref().expect("student");
    assert_eq!(student.name, "Ahmad Faris");
    assert_eq!(catalog.band(), CreditBand::new(12, 18));
    assert_eq!(catalog.courses()[1].course_type, "University");
    assert!(catalog.check().is_ok());
}

#[test]
fn missing_course_list_is_empty() {
    let catalog: Catalog =
        serde_json::from_str(r#"{"student":{"name":"X"}}"#).expect("parse catalog");
    assert!(catalog.is_empty());
    assert_eq!(catalog.band(), Ok(CreditBand::default()));
}

#[test]
fn options_deserialize_lowercase() {
    let options: ValidationOptions =
        serde_json::from_str(r#"{"overflow":"flag"}"#).expect("parse options");
    assert_eq!(options.overflow, OverflowPolicy::Flag);
    assert_eq!(options, ValidationOptions::new().with_overflow(OverflowPolicy::Flag));
}
