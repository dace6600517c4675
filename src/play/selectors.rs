//! CSS selectors for Google Play HTML parsing.
//!
//! Play serves obfuscated class names that change between deployments.
//! Each selector lists the known variants, newest first.
//!
//! **Update process**: When parsing fails, capture an HTML sample,
//! update selectors, and add a test fixture.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for store search pages.
pub mod search {
    use super::*;

    /// App card link. Every card links to its details page.
    pub static RESULT: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "a[href^='/store/apps/details?id='], \
             a[href^='https://play.google.com/store/apps/details?id=']",
        )
        .unwrap()
    });

    /// Query parameter holding the package name in a details link.
    pub const APP_ID_PARAM: &str = "id";

    /// App title.
    pub static TITLE: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "span.DdYX5, \
             div.vWM94c, \
             div.Epkrse",
        )
        .unwrap()
    });

    /// Developer name.
    pub static DEVELOPER: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "span.wMUdtb, \
             div.LbQbAe, \
             div.KoLSrc",
        )
        .unwrap()
    });

    /// Star rating text (e.g. "4.5").
    pub static SCORE: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "span.w2kbF, \
             div.TT9eCd, \
             div.pf5lIe div[aria-label]",
        )
        .unwrap()
    });

    /// Current price button text. Absent for free apps.
    pub static PRICE: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "span.VfPpfd, \
             span.VfPpkd-vQzf8d",
        )
        .unwrap()
    });

    /// Price before a sale (strikethrough).
    pub static PRICE_ORIGINAL: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "span.SUZt4c, \
             span.NXgNkf, \
             s, \
             del",
        )
        .unwrap()
    });

    /// App icon.
    pub static ICON: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "img.T75of, \
             img.stzEZd, \
             img",
        )
        .unwrap()
    });

    /// "No results" notice.
    pub static NO_RESULTS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.sAhYtc, div.fGeRUe").unwrap());
}

/// Selectors for error and block pages.
pub mod errors {
    use super::*;

    /// reCAPTCHA / unusual traffic page.
    pub static CAPTCHA: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "form#captcha-form, \
             div.g-recaptcha, \
             #recaptcha",
        )
        .unwrap()
    });

    /// Google error page container.
    pub static ERROR_PAGE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("#af-error-container").unwrap());
}
