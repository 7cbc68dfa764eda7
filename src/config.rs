use eframe::egui::{Color32, TextureId, Vec2};

/// One entry of the contextual menu. Immutable once handed to the plugin.
pub struct MenuItem {
    pub title: String,
    pub icon: Option<MenuIcon>,
    pub color: Option<Color32>,
    pub action: Box<dyn Fn()>,
}

impl MenuItem {
    pub fn new(title: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Self {
            title: title.into(),
            icon: None,
            color: None,
            action: Box::new(action),
        }
    }

    pub fn with_icon(mut self, icon: MenuIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }
}

/// What to draw inside an item disc: a font glyph, or a texture the host
/// application has already uploaded.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuIcon {
    Glyph(String),
    Texture { id: TextureId, size: Vec2 },
}

impl MenuIcon {
    pub fn glyph(glyph: impl Into<String>) -> Self {
        Self::Glyph(glyph.into())
    }
}

/// Visibility rules injected by the host application: whether the menu shows
/// at all for a node, and which items are interactable on it.
pub trait MenuRules<N> {
    fn menu_enabled(&self, target: &N) -> bool;
    fn item_enabled(&self, title: &str, target: &N) -> bool;
}

/// Closure-backed [`MenuRules`] for hosts that don't want a dedicated type.
pub struct RuleFns<N> {
    overall: Box<dyn Fn(&N) -> bool>,
    per_item: Box<dyn Fn(&str, &N) -> bool>,
}

impl<N> RuleFns<N> {
    pub fn new(
        overall: impl Fn(&N) -> bool + 'static,
        per_item: impl Fn(&str, &N) -> bool + 'static,
    ) -> Self {
        Self {
            overall: Box::new(overall),
            per_item: Box::new(per_item),
        }
    }

    /// Menu and every item always enabled.
    pub fn always() -> Self {
        Self::new(|_| true, |_, _| true)
    }
}

impl<N> MenuRules<N> for RuleFns<N> {
    fn menu_enabled(&self, target: &N) -> bool {
        (self.overall)(target)
    }

    fn item_enabled(&self, title: &str, target: &N) -> bool {
        (self.per_item)(title, target)
    }
}

/// Everything a menu registration supplies, read-only for its lifetime.
pub struct MenuConfig<N> {
    pub items: Vec<MenuItem>,
    pub close_icon: MenuIcon,
    pub rules: Box<dyn MenuRules<N>>,
    /// Distinguishes egui layers when several controllers coexist.
    pub id_salt: &'static str,
}

impl<N: 'static> MenuConfig<N> {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            close_icon: MenuIcon::glyph("\u{2716}"),
            rules: Box::new(RuleFns::always()),
            id_salt: "node-menu",
        }
    }

    pub fn with_rules(mut self, rules: impl MenuRules<N> + 'static) -> Self {
        self.rules = Box::new(rules);
        self
    }

    pub fn with_close_icon(mut self, icon: MenuIcon) -> Self {
        self.close_icon = icon;
        self
    }

    pub fn with_id_salt(mut self, salt: &'static str) -> Self {
        self.id_salt = salt;
        self
    }
}
