use showcase::domain::ports::IconCatalog;
use showcase::{IconHandle, IconLibrary, IconReference, IconResolver};

#[test]
fn test_local_case_aliases_resolve_to_same_handle() {
    let resolver = IconResolver::builtin();
    let pascal = resolver.resolve_parts("Code", "lucide-react");
    let lower = resolver.resolve_parts("code", "lucide-react");
    assert!(pascal.is_some());
    assert_eq!(pascal, lower);

    for name in [
        "Cloud",
        "Database",
        "Smartphone",
        "Server",
        "LayoutPanelLeft",
        "PocketKnife",
        "HeartHandshake",
        "Speech",
        "Award",
    ] {
        assert_eq!(
            resolver.resolve_parts(name, "lucide-react"),
            resolver.resolve_parts(&name.to_lowercase(), "lucide-react"),
            "{name}"
        );
    }
}

#[test]
fn test_delegated_miss_is_none_but_local_miss_is_default() {
    let resolver = IconResolver::builtin();
    assert_eq!(resolver.resolve_parts("SiDefinitelyNotAnIcon", "si"), None);
    assert_eq!(resolver.resolve_parts("FaNope", "fa"), None);
    assert_eq!(resolver.resolve_parts("GiNope", "gi"), None);

    let fallback = resolver.resolve_parts("DefinitelyNotAnIcon", "lucide-react");
    assert_eq!(fallback, Some(IconHandle::new(IconLibrary::Local, "Code2")));
}

#[test]
fn test_library_is_case_insensitive() {
    let resolver = IconResolver::builtin();
    let expected = Some(IconHandle::new(IconLibrary::SimpleIcons, "SiReact"));
    assert_eq!(resolver.resolve_parts("SiReact", "si"), expected);
    assert_eq!(resolver.resolve_parts("SiReact", "SI"), expected);
    assert_eq!(
        resolver.resolve_parts("award", "LUCIDE-REACT"),
        Some(IconHandle::new(IconLibrary::Local, "Award"))
    );
}

#[test]
fn test_unknown_library_is_none() {
    let resolver = IconResolver::builtin();
    assert_eq!(resolver.resolve_parts("Code", "material"), None);
    assert_eq!(resolver.resolve_parts("Code", ""), None);
}

#[test]
fn test_resolve_reference() {
    let resolver = IconResolver::builtin();
    let reference = IconReference::new("FaPython", "fa");
    assert_eq!(
        resolver.resolve(&reference),
        Some(IconHandle::new(IconLibrary::FontAwesome, "FaPython"))
    );
}

#[test]
fn test_catalog_dispatch_by_library() {
    let resolver = IconResolver::builtin();
    for library in IconLibrary::ALL {
        let catalog = resolver.catalog(library);
        if library == IconLibrary::Local {
            assert!(catalog.lookup("anything").is_some());
        } else {
            assert!(catalog.lookup("anything").is_none());
        }
    }
}
