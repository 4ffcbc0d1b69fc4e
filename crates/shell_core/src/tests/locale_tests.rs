use super::*;
use crate::i18n::Catalog;

fn en() -> LocaleId {
    LocaleId::new("en")
}

fn zh() -> LocaleId {
    LocaleId::new("zh")
}

fn controller() -> LocaleController {
    let catalog = Catalog::new()
        .with_entries("en", [("greeting", "Hello"), ("onlyEnglish", "English only")])
        .with_entries("zh", [("greeting", "你好")]);
    LocaleController::new(vec![en(), zh()], en(), Arc::new(catalog)).expect("controller")
}

#[test]
fn set_then_get_returns_each_available_locale() {
    let locales = controller();
    for id in [zh(), en(), zh()] {
        locales.set_locale(&id).expect("available");
        assert_eq!(locales.active_locale(), id);
    }
}

#[test]
fn invalid_locale_is_rejected_without_mutation() {
    let locales = controller();
    locales.set_locale(&zh()).expect("zh");
    let err = locales
        .set_locale(&LocaleId::new("fr"))
        .expect_err("fr is not available");
    assert_eq!(
        err,
        ShellError::InvalidLocale {
            requested: LocaleId::new("fr"),
            available: vec![en(), zh()],
        }
    );
    assert_eq!(locales.active_locale(), zh());
}

#[test]
fn translation_follows_the_active_locale() {
    let locales = controller();
    assert_eq!(locales.translate("greeting"), "Hello");
    locales.set_locale(&zh()).expect("zh");
    assert_eq!(locales.translate("greeting"), "你好");
}

#[test]
fn missing_translation_falls_back_to_key() {
    let locales = controller();
    assert_eq!(locales.translate("onlyEnglish"), "English only");
    locales.set_locale(&zh()).expect("zh");
    assert_eq!(locales.translate("onlyEnglish"), "onlyEnglish");
    assert_eq!(locales.translate("onlyEnglish"), "onlyEnglish");
    assert_eq!(
        locales.translate_or_err("onlyEnglish"),
        Err(ShellError::MissingTranslation {
            key: "onlyEnglish".into(),
            locale: zh(),
        })
    );
}

#[test]
fn redundant_switch_is_unchanged_and_silent() {
    let locales = controller();
    let mut subscription = locales.subscribe();

    assert_eq!(locales.set_locale(&en()), Ok(LocaleChange::Unchanged));
    assert!(!subscription.has_changed());
    assert_eq!(subscription.changed(), None);
}

#[test]
fn subscribers_see_each_real_switch_once() {
    let locales = controller();
    let mut subscription = locales.subscribe();

    assert_eq!(
        locales.set_locale(&zh()),
        Ok(LocaleChange::Switched { from: en(), to: zh() })
    );
    assert_eq!(subscription.changed(), Some(zh()));
    assert_eq!(subscription.changed(), None);

    locales.set_locale(&zh()).expect("zh again");
    assert_eq!(subscription.changed(), None);
    assert_eq!(subscription.current(), zh());
}

#[test]
fn unavailable_initial_locale_falls_back_to_first() {
    let locales = LocaleController::new(
        vec![en(), zh()],
        LocaleId::new("de"),
        Arc::new(Catalog::new()),
    )
    .expect("controller");
    assert_eq!(locales.active_locale(), en());
}

#[test]
fn empty_locale_set_is_rejected() {
    let result = LocaleController::new(Vec::new(), en(), Arc::new(Catalog::new()));
    assert!(matches!(result, Err(ShellError::EmptyLocaleSet)));
}

#[test]
fn duplicate_available_locales_collapse() {
    let locales = LocaleController::new(
        vec![en(), zh(), LocaleId::new("EN")],
        zh(),
        Arc::new(Catalog::new()),
    )
    .expect("controller");
    assert_eq!(locales.available_locales(), [en(), zh()]);
    assert!(locales.is_active(&zh()));
}
