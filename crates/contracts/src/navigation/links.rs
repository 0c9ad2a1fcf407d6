use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavLinkKind {
    Plain,
    /// Opens the products dropdown on the desktop bar.
    ProductsTrigger,
    /// Rendered as a filled pill.
    CallToAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub kind: NavLinkKind,
}

impl NavLink {
    const fn new(path: &'static str, label: &'static str, kind: NavLinkKind) -> Self {
        Self { path, label, kind }
    }

    pub fn is_call_to_action(&self) -> bool {
        self.kind == NavLinkKind::CallToAction
    }
}

pub const PRODUCTS_PATH: &str = "/products";

/// Top-level links of the desktop bar, in display order.
pub const DESKTOP_LINKS: &[NavLink] = &[
    NavLink::new("/", "Home", NavLinkKind::Plain),
    NavLink::new("/about", "About", NavLinkKind::Plain),
    NavLink::new(PRODUCTS_PATH, "Products", NavLinkKind::ProductsTrigger),
    NavLink::new("/industries", "Industries", NavLinkKind::Plain),
    NavLink::new("/contact", "Contact Us", NavLinkKind::CallToAction),
];

/// Links of the slide-in mobile panel, in display order.
pub const MOBILE_LINKS: &[NavLink] = &[
    NavLink::new("/", "Home", NavLinkKind::Plain),
    NavLink::new("/about", "About", NavLinkKind::Plain),
    NavLink::new(PRODUCTS_PATH, "Products", NavLinkKind::Plain),
    NavLink::new("/industries", "Industries", NavLinkKind::Plain),
    NavLink::new("/contact", "Contact Us", NavLinkKind::CallToAction),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(links: &[NavLink]) -> Vec<&'static str> {
        links.iter().map(|link| link.path).collect()
    }

    #[test]
    fn test_desktop_links_order() {
        assert_eq!(
            paths(DESKTOP_LINKS),
            vec!["/", "/about", "/products", "/industries", "/contact"]
        );
        let labels: Vec<_> = DESKTOP_LINKS.iter().map(|link| link.label).collect();
        assert_eq!(labels, vec!["Home", "About", "Products", "Industries", "Contact Us"]);
    }

    #[test]
    fn test_single_products_trigger_and_cta() {
        let triggers: Vec<_> = DESKTOP_LINKS
            .iter()
            .filter(|link| link.kind == NavLinkKind::ProductsTrigger)
            .collect();
        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].label, "Products");

        for links in [DESKTOP_LINKS, MOBILE_LINKS] {
            let last = links.last().unwrap();
            assert!(last.is_call_to_action());
            assert_eq!(links.iter().filter(|link| link.is_call_to_action()).count(), 1);
        }
    }

    #[test]
    fn test_mobile_links_match_desktop_targets() {
        assert_eq!(paths(MOBILE_LINKS), paths(DESKTOP_LINKS));
        assert!(MOBILE_LINKS
            .iter()
            .all(|link| link.kind != NavLinkKind::ProductsTrigger));
    }
}
