use super::*;
use crate::{i18n::Catalog, routing::RouteTable};
use std::sync::Arc;

fn parts(location: &str) -> (Navigator, LocaleController) {
    let navigator = Navigator::start(RouteTable::with_defaults().expect("table"), location);
    let locales = LocaleController::new(
        vec![LocaleId::new("en"), LocaleId::new("zh")],
        LocaleId::new("en"),
        Arc::new(Catalog::bundled().expect("catalog")),
    )
    .expect("locales");
    (navigator, locales)
}

#[test]
fn links_follow_enabled_render_routes_in_table_order() {
    let (navigator, locales) = parts("/");
    let header = HeaderModel::build(&navigator, &locales);
    let targets: Vec<&str> = header.links.iter().map(|link| link.to.as_str()).collect();
    assert_eq!(targets, vec!["/query", "/datasources"]);
    assert_eq!(header.brand.to, "/query");
    assert_eq!(header.brand.label, "Smart ERP AI Assistant");
}

#[test]
fn active_link_tracks_current_route() {
    let (mut navigator, locales) = parts("/");
    let header = HeaderModel::build(&navigator, &locales);
    assert_eq!(header.active_link().map(|link| link.to.as_str()), Some("/query"));

    navigator.navigate("/datasources");
    let header = HeaderModel::build(&navigator, &locales);
    assert_eq!(
        header.active_link().map(|link| link.to.as_str()),
        Some("/datasources")
    );

    navigator.navigate("/charts");
    let header = HeaderModel::build(&navigator, &locales);
    assert_eq!(header.active_link(), None);
}

#[test]
fn active_locale_control_is_disabled_not_hidden() {
    let (navigator, locales) = parts("/");
    let header = HeaderModel::build(&navigator, &locales);
    let en = header.locale_control(&LocaleId::new("en")).expect("EN");
    let zh = header.locale_control(&LocaleId::new("zh")).expect("ZH");
    assert_eq!((en.label.as_str(), en.disabled), ("EN", true));
    assert_eq!((zh.label.as_str(), zh.disabled), ("ZH", false));

    locales.set_locale(&LocaleId::new("zh")).expect("zh");
    let header = HeaderModel::build(&navigator, &locales);
    assert!(!header.locale_control(&LocaleId::new("en")).expect("EN").disabled);
    assert!(header.locale_control(&LocaleId::new("zh")).expect("ZH").disabled);
}

#[test]
fn labels_are_translated_on_every_build() {
    let (navigator, locales) = parts("/");
    locales.set_locale(&LocaleId::new("zh")).expect("zh");
    let header = HeaderModel::build(&navigator, &locales);
    let labels: Vec<&str> = header.links.iter().map(|link| link.label.as_str()).collect();
    assert_eq!(labels, vec!["智能问答", "数据源管理"]);
    assert_eq!(header.brand.label, "智能ERP AI助手");
}
