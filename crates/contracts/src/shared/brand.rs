use serde::Serialize;

/// Fixed visual identity of the site.
///
/// Not runtime-configurable: the frontend provides `BrandConfig::default()`
/// through context and exposes the colors to CSS as custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandConfig {
    pub site_name: &'static str,
    pub logo_src: &'static str,
    pub logo_alt: &'static str,
    pub logo_width: u32,
    pub logo_height: u32,
    /// Primary brand color (CSS hex)
    pub primary_color: &'static str,
    /// Accent color used for hover states and underlines (CSS hex)
    pub accent_color: &'static str,
}

impl BrandConfig {
    pub const fn chayaprinttech() -> Self {
        Self {
            site_name: "Chayaprinttech",
            logo_src: "/CPT.png",
            logo_alt: "Chayaprinttech Logo",
            logo_width: 60,
            logo_height: 60,
            primary_color: "#04499C",
            accent_color: "#F4A405",
        }
    }

    /// Inline style declaring the brand colors as CSS custom properties.
    pub fn css_variables(&self) -> String {
        format!(
            "--brand-primary: {}; --brand-accent: {};",
            self.primary_color, self.accent_color
        )
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self::chayaprinttech()
    }
}
