use serde_json::json;
use showcase::domain::model::{RawSection, TechnologySections};
use showcase::{SectionCatalog, SectionItem, SectionKind, SectionSelector, ShowcaseError};

fn technology(value: serde_json::Value) -> TechnologySections {
    serde_json::from_value(value).unwrap()
}

fn certifications(count: usize) -> RawSection {
    let items: Vec<_> = (0..count)
        .map(|i| json!({ "name": format!("Cert {}", i), "imageKey": format!("badge{}", i) }))
        .collect();
    serde_json::from_value(json!({
        "section_icon": { "name": "Award", "library": "lucide-react" },
        "items": items
    }))
    .unwrap()
}

fn cloud_tools() -> TechnologySections {
    let skills: Vec<_> = (0..6)
        .map(|i| json!({ "name": format!("Tool {}", i), "icon": "SiDocker", "library": "si" }))
        .collect();
    technology(json!({
        "cloud_tools": {
            "section_icon": { "name": "cloud", "library": "lucide-react", "color": "#0ea5e9" },
            "skills": skills
        }
    }))
}

#[test]
fn test_certifications_scenario() {
    let catalog = SectionCatalog::merge(cloud_tools(), Some(certifications(4)), "certifications").unwrap();
    let mut selector = SectionSelector::new(catalog);

    assert_eq!(selector.selected_key(), Some("cloud_tools"));
    assert_eq!(selector.active_items().len(), 6);

    selector.select("certifications").unwrap();
    let items = selector.active_items();
    assert_eq!(items.len(), 4);
    assert!(items
        .iter()
        .all(|item| matches!(item, SectionItem::Certification(_))));
    assert_eq!(items[0].name(), "Cert 0");
}

#[test]
fn test_merge_collision_is_rejected() {
    let sections = technology(json!({
        "frontend": { "skills": [] },
        "certifications": { "skills": [] }
    }));
    let err = SectionCatalog::merge(sections, Some(certifications(1)), "certifications").unwrap_err();
    match err {
        ShowcaseError::CatalogMergeCollision { key } => assert_eq!(key, "certifications"),
        other => panic!("expected CatalogMergeCollision, got {:?}", other),
    }
}

#[test]
fn test_duplicate_technology_key_is_rejected() {
    let sections: TechnologySections =
        serde_json::from_str(r#"{ "backend": { "skills": [] }, "backend": { "skills": [] } }"#).unwrap();
    assert!(matches!(
        SectionCatalog::merge(sections, None, "certifications"),
        Err(ShowcaseError::CatalogMergeCollision { .. })
    ));
}

#[test]
fn test_key_count_is_sum_of_both_catalogs() {
    let sections = technology(json!({
        "frontend": { "skills": [] },
        "backend": { "skills": [] },
        "soft_skills": { "skills": [] },
        "languages": { "languages_list": [] }
    }));
    let catalog = SectionCatalog::merge(sections, Some(certifications(2)), "certifications").unwrap();
    let selector = SectionSelector::new(catalog);
    assert_eq!(selector.section_keys().len(), 4 + 1);
    assert_eq!(
        selector.section_keys(),
        vec!["frontend", "backend", "soft_skills", "languages", "certifications"]
    );
}

#[test]
fn test_unknown_section_is_rejected_without_changing_selection() {
    let catalog = SectionCatalog::merge(cloud_tools(), Some(certifications(4)), "certifications").unwrap();
    let mut selector = SectionSelector::new(catalog);
    selector.select("certifications").unwrap();
    match selector.select("Cloud Tools") {
        Err(ShowcaseError::UnknownSection { key }) => assert_eq!(key, "Cloud Tools"),
        other => panic!("expected UnknownSection, got {:?}", other),
    }
    assert_eq!(selector.selected_key(), Some("certifications"));
}

#[test]
fn test_three_shapes_are_normalized() {
    let sections = technology(json!({
        "languages": {
            "languages_list": [
                { "name": "Spanish", "level": "Native" },
                { "name": "English", "level": "B2" }
            ]
        },
        "databases": {
            "skills": [ { "name": "PostgreSQL", "icon": "SiPostgresql", "library": "si" } ]
        }
    }));
    let catalog = SectionCatalog::merge(sections, Some(certifications(3)), "certifications").unwrap();

    let kinds: Vec<SectionKind> = catalog.sections().iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![SectionKind::Languages, SectionKind::Skills, SectionKind::Certifications]
    );

    let mut selector = SectionSelector::new(catalog);
    let names: Vec<String> = selector
        .active_items()
        .iter()
        .map(|i| i.name().to_string())
        .collect();
    assert_eq!(names, vec!["Spanish", "English"]);

    selector.select("databases").unwrap();
    assert_eq!(selector.active_items().len(), 1);
}

#[test]
fn test_titles_derive_from_keys() {
    let catalog = SectionCatalog::merge(cloud_tools(), Some(certifications(1)), "certifications").unwrap();
    let titles: Vec<&str> = catalog.sections().iter().map(|s| s.title()).collect();
    assert_eq!(titles, vec!["Cloud Tools", "Certifications"]);
}
