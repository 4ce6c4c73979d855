//! End-to-end navigation scenarios over the core state machines, driven the
//! way the web shell drives them: location changes, resize signals, clicks.

use embediq_core::route::path_from_hash;
use embediq_core::{
    Breakpoint, DocsTab, DrawerState, FooterLink, NavDrawer, NavEvent, PageId, SiteConfig,
    TabSelector, TabSet, ViewportClass,
};

/// Shell-level state as the web app holds it across events.
struct Shell {
    config: SiteConfig,
    page: PageId,
    drawer: NavDrawer,
    docs_tabs: Option<TabSelector<DocsTab>>,
}

impl Shell {
    fn mount(config: SiteConfig, hash: &str, width: f64) -> Self {
        let drawer = NavDrawer::new(config.breakpoint.classify(width));
        let mut shell = Self {
            config,
            page: PageId::NotFound,
            drawer,
            docs_tabs: None,
        };
        shell.hash_changed(hash);
        shell
    }

    fn hash_changed(&mut self, hash: &str) {
        let page = self.config.routes.resolve(&path_from_hash(hash));
        // The docs view's tab state lives and dies with the view.
        self.docs_tabs = match (self.page, page) {
            (PageId::Docs, PageId::Docs) => self.docs_tabs,
            (_, PageId::Docs) => Some(TabSelector::new()),
            _ => None,
        };
        self.page = page;
    }

    fn resize(&mut self, width: f64) {
        let class = self.config.breakpoint.classify(width);
        self.drawer.apply(NavEvent::ViewportChanged(class));
    }

    /// Anchors without a target do not navigate.
    fn click_footer_link(&mut self, link: &FooterLink) {
        if let Some(target) = link.target() {
            self.hash_changed(target);
        }
    }

    fn click_drawer_item(&mut self, path: &str) {
        self.drawer.apply(NavEvent::ItemSelected);
        self.hash_changed(&format!("#{}", path));
    }
}

#[test]
fn unknown_page_renders_not_found() {
    let shell = Shell::mount(SiteConfig::default(), "#/unknown-page", 1200.0);
    assert_eq!(shell.page, PageId::NotFound);
    // The not-found view links back to the landing route
    assert_eq!(shell.config.routes.resolve("/"), PageId::Home);
}

#[test]
fn docs_search_tab_is_the_only_visible_panel() {
    let mut shell = Shell::mount(SiteConfig::default(), "#/", 1200.0);
    shell.hash_changed("#/docs");
    assert_eq!(shell.page, PageId::Docs);

    let tabs = shell.docs_tabs.as_mut().unwrap();
    assert_eq!(tabs.active(), DocsTab::Overview);
    tabs.select(DocsTab::from_index(2).unwrap());

    let visible: Vec<_> = DocsTab::ALL.iter().filter(|t| tabs.is_active(**t)).collect();
    assert_eq!(visible, [&DocsTab::Search]);
}

#[test]
fn tab_state_is_not_kept_across_navigation() {
    let mut shell = Shell::mount(SiteConfig::default(), "#/docs", 1200.0);
    shell.docs_tabs.as_mut().unwrap().select(DocsTab::Query);

    shell.hash_changed("#/query");
    assert!(shell.docs_tabs.is_none());

    shell.hash_changed("#/docs");
    assert_eq!(shell.docs_tabs.unwrap().active(), DocsTab::Overview);
}

#[test]
fn shrinking_reveals_drawer_left_open() {
    let mut shell = Shell::mount(SiteConfig::default(), "#/", 500.0);
    shell.drawer.apply(NavEvent::Toggle);
    assert!(shell.drawer.overlay_visible());

    shell.resize(1200.0);
    assert_eq!(shell.drawer.viewport(), ViewportClass::Wide);
    assert!(!shell.drawer.overlay_visible());

    shell.resize(500.0);
    assert_eq!(shell.drawer.state(), DrawerState::Open);
    assert!(shell.drawer.overlay_visible());
}

#[test]
fn navigation_does_not_reset_drawer() {
    let mut shell = Shell::mount(SiteConfig::default(), "#/", 500.0);
    shell.drawer.apply(NavEvent::Toggle);
    shell.hash_changed("#/docs");
    assert_eq!(shell.drawer.state(), DrawerState::Open);
}

#[test]
fn selecting_drawer_item_closes_and_navigates() {
    let mut shell = Shell::mount(SiteConfig::default(), "#/", 500.0);
    shell.drawer.apply(NavEvent::Toggle);

    let target = shell.config.nav.items()[1].path.clone();
    shell.click_drawer_item(&target);

    assert_eq!(shell.drawer.state(), DrawerState::Closed);
    assert_eq!(shell.page, PageId::Query);
}

#[test]
fn footer_placeholders_keep_the_docs_view() {
    let mut shell = Shell::mount(SiteConfig::default(), "#/docs", 1200.0);
    shell.docs_tabs.as_mut().unwrap().select(DocsTab::Search);

    let links = shell.config.footer_links.clone();
    for link in &links {
        shell.click_footer_link(link);
        assert_eq!(shell.page, PageId::Docs, "{}", link.label);
        assert_eq!(shell.docs_tabs.unwrap().active(), DocsTab::Search);
    }
}

#[test]
fn footer_hash_links_resolve_to_real_pages() {
    let config = SiteConfig::from_toml(
        r##"
        [[footer_links]]
        label = "Reference"
        href = "#/docs"
        "##,
    )
    .unwrap();

    let mut shell = Shell::mount(config, "#/", 1200.0);
    let link = shell.config.footer_links[0].clone();
    shell.click_footer_link(&link);
    assert_eq!(shell.page, PageId::Docs);
}

#[test]
fn every_nav_item_resolves_to_a_real_page() {
    let config = SiteConfig::default();
    for item in config.nav.items() {
        let page = config.routes.resolve(&path_from_hash(&item.href()));
        assert_ne!(page, PageId::NotFound, "{} -> {}", item.label, item.path);
    }
}

#[test]
fn custom_breakpoint_drives_classification() {
    let config = SiteConfig::from_toml("[site]\nbreakpoint = 600\n").unwrap();
    assert_eq!(config.breakpoint, Breakpoint::new(600));

    let mut shell = Shell::mount(config, "#/", 700.0);
    assert_eq!(shell.drawer.viewport(), ViewportClass::Wide);
    shell.resize(599.0);
    assert_eq!(shell.drawer.viewport(), ViewportClass::Compact);
}
