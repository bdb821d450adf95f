use ai_tools::{NodeCategory, NodeTag, ParamKind, TagCatalog, Tagged};

struct Patrol;

impl Tagged for Patrol {
    fn tag() -> NodeTag {
        NodeTag::new("Patrol", NodeCategory::Action)
            .with_param("route", ParamKind::Text)
            .with_param("speed", ParamKind::Float)
            .with_param("loop", ParamKind::Bool)
    }
}

struct IsHungry;

impl Tagged for IsHungry {
    fn tag() -> NodeTag {
        NodeTag::new("IsHungry", NodeCategory::Conditional)
    }
}

#[test]
fn tag_params_keep_declaration_order() {
    let tag = Patrol::tag();
    let names = tag.params.iter().map(|p| p.name.as_ref()).collect::<Vec<_>>();
    assert_eq!(names, vec!["route", "speed", "loop"]);
    assert_eq!(tag.param("speed").map(|p| p.kind), Some(ParamKind::Float));
    assert!(tag.param("missing").is_none());
}

#[test]
fn catalog_registers_in_order_and_replaces_by_name() {
    let mut catalog = TagCatalog::new();
    catalog.register::<Patrol>().register::<IsHungry>();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.tags[0].name, "Patrol");

    catalog.insert(NodeTag::new("Patrol", NodeCategory::Action));
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.tags[0].name, "Patrol");
    assert!(catalog.get("Patrol").unwrap().params.is_empty());

    let conditionals = catalog
        .by_category(NodeCategory::Conditional)
        .map(|t| t.name.as_ref())
        .collect::<Vec<_>>();
    assert_eq!(conditionals, vec!["IsHungry"]);
}

#[test]
fn merge_appends_and_replaces_by_name() {
    let mut base = TagCatalog::new();
    base.register::<Patrol>();

    let mut extra = TagCatalog::new();
    extra
        .insert(NodeTag::new("Patrol", NodeCategory::Task))
        .register::<IsHungry>();

    base.merge(extra);
    assert_eq!(base.len(), 2);
    assert_eq!(base.tags[0].category, NodeCategory::Task);
    assert_eq!(base.tags[1].name, "IsHungry");
}
