/// A link in the navigation bar, pointing at one of the page's section anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("/#{}", self.anchor)
    }
}

// The anchors double as the `id` of each `<section>` on the page.
// Renaming one side without the other silently breaks highlighting.
pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const WORK: &str = "work";
pub const PLAY: &str = "play";

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        name: "Home",
        anchor: HOME,
    },
    NavItem {
        name: "About",
        anchor: ABOUT,
    },
    NavItem {
        name: "Work",
        anchor: WORK,
    },
    NavItem {
        name: "Play",
        anchor: PLAY,
    },
];

pub const SITE_OWNER: &str = "Earn";
pub const SITE_DESCRIPTION: &str =
    "Software and Knowledge Engineering student at Kasetsart University";
pub const INTRO: &str = "Hi there! I'm Earn, a third-year Software and Knowledge Engineering student at Kasetsart University. Pleased to meet you!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_cover_every_section_once() {
        let anchors = NAV_ITEMS.iter().map(|i| i.anchor).collect::<Vec<_>>();
        assert_eq!(anchors, vec![HOME, ABOUT, WORK, PLAY]);
    }

    #[test]
    fn test_nav_href() {
        assert_eq!(NAV_ITEMS[0].href(), "/#home");
        assert_eq!(NAV_ITEMS[3].href(), "/#play");
    }
}
