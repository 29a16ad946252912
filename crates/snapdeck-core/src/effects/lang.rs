use crate::config::LangConfig;
use crate::page::LanguageLink;

/// What a click on a language link should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    Navigate(String),
    /// Navigation is switched off for this deployment
    Suppressed,
}

/// How a host should present language links
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkPresentation {
    pub opacity: f32,
    pub interactive: bool,
}

/// Deployment switch for language link navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkGate {
    disabled: bool,
}

impl LinkGate {
    pub fn new(config: &LangConfig) -> Self {
        Self {
            disabled: config.disable_links_navigation,
        }
    }

    pub fn click(&self, link: &LanguageLink) -> LinkAction {
        if self.disabled {
            LinkAction::Suppressed
        } else {
            LinkAction::Navigate(link.href.clone())
        }
    }

    pub fn presentation(&self) -> LinkPresentation {
        if self.disabled {
            LinkPresentation {
                opacity: 0.5,
                interactive: false,
            }
        } else {
            LinkPresentation {
                opacity: 1.0,
                interactive: true,
            }
        }
    }
}
