//! Footer labels for the multiselect dropdown.

use crate::bundle::{KeySet, ResourceBundle};
use crate::error::I18nError;
use crate::locale::LocaleTag;
use crate::registry::BundleRegistry;

/// Logical bundle name.
pub const NAME: &str = "multiselect.footer";

pub const SELECT_ALL: &str = "selectAll";
pub const DESELECT_ALL: &str = "deselectAll";
pub const CLOSE: &str = "close";

/// The fixed key set, in declaration order.
pub const KEYS: [&str; 3] = [SELECT_ALL, DESELECT_ALL, CLOSE];

/// `(locale, selectAll, deselectAll, close)`.
pub const LOCALES: [(&str, &str, &str, &str); 16] = [
    ("en_GB", "Select All", "Deselect All", "Close"),
    ("en_US", "Select All", "Deselect All", "Close"),
    ("fr_FR", "Tout sélectionner", "Tout désélectionner", "Fermer"),
    ("de_DE", "Alle auswählen", "Auswahl aufheben", "Schließen"),
    ("es_ES", "Seleccionar todo", "Deseleccionar todo", "Cerrar"),
    ("it_IT", "Seleziona tutto", "Deseleziona tutto", "Chiudi"),
    ("pt_BR", "Selecionar tudo", "Desmarcar tudo", "Fechar"),
    ("nl_NL", "Alles selecteren", "Alles deselecteren", "Sluiten"),
    ("sv_SE", "Markera alla", "Avmarkera alla", "Stäng"),
    ("da_DK", "Vælg alle", "Fravælg alle", "Luk"),
    ("pl_PL", "Zaznacz wszystko", "Odznacz wszystko", "Zamknij"),
    ("ru_RU", "Выбрать все", "Снять выделение", "Закрыть"),
    ("ja_JP", "すべて選択", "すべて選択解除", "閉じる"),
    ("ko_KR", "모두 선택", "모두 선택 해제", "닫기"),
    ("zh_CN", "全选", "取消全选", "关闭"),
    ("zh_TW", "全選", "取消全選", "關閉"),
];

#[must_use]
pub fn key_set() -> KeySet {
    KeySet::new(KEYS)
}

/// Build every locale's bundle.
pub fn bundles() -> Result<Vec<ResourceBundle>, I18nError> {
    let keys = key_set();
    LOCALES
        .iter()
        .map(|&(tag, select_all, deselect_all, close)| {
            ResourceBundle::new(
                NAME,
                LocaleTag::parse(tag)?,
                &keys,
                [
                    (SELECT_ALL, select_all),
                    (DESELECT_ALL, deselect_all),
                    (CLOSE, close),
                ],
            )
        })
        .collect()
}

/// Define the key set and register all locales into `registry`.
pub fn register(registry: &mut BundleRegistry) -> Result<(), I18nError> {
    registry.define(NAME, key_set())?;
    for bundle in bundles()? {
        registry.register(bundle)?;
    }
    Ok(())
}
