use serde_json::json;
use std::path::{Path, PathBuf};
use techsheet::{
    DesignObject, DimensionSpec, Error, ExpectedDimensions, Field, SheetLocale,
    TechSheetGenerator, create_tech_sheets,
};

fn sample_svg() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("svg")
        .join("sample.svg")
}

#[test]
fn create_tech_sheets_returns_both_sheets() {
    let spec = DimensionSpec::new().with("rect1", ExpectedDimensions::new(Some(100.0), Some(50.0)));
    let sheets = create_tech_sheets(sample_svg(), &spec).unwrap();
    assert!(sheets.client_sheet.contains("rect1"));
    assert!(sheets.workshop_sheet.contains("rect2"));
    assert!(!sheets.has_mismatches());
}

#[test]
fn mismatches_are_surfaced_without_blocking_sheets() {
    let spec = DimensionSpec::new().with("rect1", ExpectedDimensions::new(Some(110.0), None));
    let sheets = create_tech_sheets(sample_svg(), &spec).unwrap();
    assert_eq!(sheets.mismatches.len(), 1);
    assert_eq!(sheets.mismatches[0].field, Field::Width);
    assert_eq!(sheets.mismatches[0].expected, 110.0);
    assert_eq!(
        sheets.client_sheet,
        "Tech sheet for client:\n- rect1: 100×50 (rect)\n- rect2: 40×40 (rect)"
    );
}

#[test]
fn generator_applies_tolerance_and_locale() {
    let generator = TechSheetGenerator::new()
        .with_tolerance(0.5)
        .with_locale(SheetLocale::Ru);
    let objects = [DesignObject::circle("hole", 10.0)];
    let spec = DimensionSpec::new().with("hole", ExpectedDimensions::new(Some(20.4), Some(21.0)));
    let sheets = generator.generate_from_objects(&objects, &spec);

    assert_eq!(sheets.mismatches.len(), 1);
    assert_eq!(sheets.mismatches[0].field, Field::Height);
    assert!(sheets.client_sheet.starts_with("Тех.лист для клиента:"));
    assert_eq!(
        sheets.workshop_sheet,
        "Тех.лист для цеха:\nID\tТип\tШирина\tВысота\nhole\tcircle\t20\t20"
    );
}

#[test]
fn tech_sheets_serialize_with_mismatches() {
    let objects = [DesignObject::rect("a", 1.0, 2.0)];
    let spec = DimensionSpec::new().with("a", ExpectedDimensions::new(None, Some(3.0)));
    let sheets = TechSheetGenerator::new().generate_from_objects(&objects, &spec);
    assert_eq!(
        serde_json::to_value(&sheets).unwrap(),
        json!({
            "client_sheet": "Tech sheet for client:\n- a: 1×2 (rect)",
            "workshop_sheet": "Tech sheet for workshop:\nID\tType\tWidth\tHeight\na\trect\t1\t2",
            "mismatches": [
                { "id": "a", "field": "height", "expected": 3.0, "actual": 2.0 }
            ]
        })
    );
}

#[test]
fn extraction_errors_abort_generation() {
    let err = create_tech_sheets("drawing.cdr", &DimensionSpec::new()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }), "{err}");

    let err = create_tech_sheets("drawing.txt", &DimensionSpec::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }), "{err}");
}
