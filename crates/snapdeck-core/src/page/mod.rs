mod document;

pub use document::{
    Backdrop, Block, Icon, IconMotion, LanguageLink, PageDocument, PagerLink, SiteInfo,
};
