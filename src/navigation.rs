//! This file defines the navigation bar shown at the top of every page.

use maud::{Markup, html};

use crate::endpoints;

/// A link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        html! {
            @if self.is_current {
                a href=(self.url) class="current" aria-current="page" { (self.title) }
            } @else {
                a href=(self.url) { (self.title) }
            }
        }
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = [
            (endpoints::ROOT, "Transactions"),
            (endpoints::ADD_TRANSACTION, "Add"),
            (endpoints::SEARCH, "Search"),
            (endpoints::BALANCE, "Balance"),
        ]
        .into_iter()
        .map(|(url, title)| Link {
            url,
            title,
            is_current: active_endpoint == url,
        })
        .collect();

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html! {
            nav
            {
                @for link in self.links {
                    (link.into_html())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::endpoints;

    use super::NavBar;

    #[test]
    fn marks_active_link_as_current() {
        let markup = NavBar::new(endpoints::SEARCH).into_html();
        let fragment = Html::parse_fragment(&markup.into_string());

        let links = fragment
            .select(&Selector::parse("nav a").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(links.len(), 4, "want 4 links, got {}", links.len());

        let current = fragment
            .select(&Selector::parse("nav a.current").unwrap())
            .map(|link| link.value().attr("href"))
            .collect::<Vec<_>>();
        assert_eq!(current, vec![Some(endpoints::SEARCH)]);
    }

    #[test]
    fn no_link_is_current_for_unlisted_page() {
        let markup = NavBar::new(endpoints::EDIT_TRANSACTION).into_html();
        let fragment = Html::parse_fragment(&markup.into_string());

        let current = fragment
            .select(&Selector::parse("nav a.current").unwrap())
            .count();
        assert_eq!(current, 0);
    }
}
