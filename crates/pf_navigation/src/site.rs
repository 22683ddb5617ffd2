use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::controller::ViewControllerBuilder;
use crate::error::Result;
use crate::settings::ControllerSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDefinition {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDefinition {
    pub label: String,
    pub view: String,
}

/// Declarative description of a site's views and navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDefinition {
    pub title: String,
    pub views: Vec<ViewDefinition>,
    pub indicators: Vec<IndicatorDefinition>,
    #[serde(default)]
    pub settings: ControllerSettings,
}

impl SiteDefinition {
    /// The portfolio's own sections
    pub fn portfolio() -> Self {
        let sections = [
            ("home", "Home"),
            ("about", "About"),
            ("skills", "Skills"),
            ("projects", "Projects"),
            ("contact", "Contact"),
        ];

        SiteDefinition {
            title: "Charlie Old".to_string(),
            views: sections
                .iter()
                .map(|(id, title)| ViewDefinition {
                    id: id.to_string(),
                    title: title.to_string(),
                })
                .collect(),
            indicators: sections
                .iter()
                .map(|(id, title)| IndicatorDefinition {
                    label: title.to_string(),
                    view: id.to_string(),
                })
                .collect(),
            settings: ControllerSettings::new(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "Load site definition");

        let content = std::fs::read(path)?;
        let site = serde_json::from_slice(&content)?;

        Ok(site)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builder with every view and indicator registered; animations are
    /// attached by the host.
    pub fn builder<H>(&self) -> ViewControllerBuilder<H> {
        let builder = self
            .views
            .iter()
            .fold(ViewControllerBuilder::new(), |builder, view| {
                builder.register_view(&view.id, &view.title)
            });

        self.indicators
            .iter()
            .fold(builder, |builder, indicator| {
                builder.register_indicator(&indicator.label, &indicator.view)
            })
            .settings(self.settings.clone())
    }
}

impl Default for SiteDefinition {
    fn default() -> Self {
        Self::portfolio()
    }
}
