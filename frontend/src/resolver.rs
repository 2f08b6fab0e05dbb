//! Slug to service resolution for the detail page.

use crate::catalog::{self, ServiceRecord};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Found(&'a ServiceRecord),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn record(&self) -> Option<&'a ServiceRecord> {
        match self {
            Resolution::Found(record) => Some(record),
            Resolution::NotFound => None,
        }
    }
}

pub fn resolve(slug: &str) -> Resolution<'static> {
    resolve_in(catalog::all(), slug)
}

pub fn resolve_in<'a>(services: &'a [ServiceRecord], slug: &str) -> Resolution<'a> {
    services
        .iter()
        .find(|s| s.slug == slug)
        .map_or(Resolution::NotFound, Resolution::Found)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailState<'a> {
    Loading,
    Resolved(Resolution<'a>),
}

/// Handle for one lookup. Only the most recently issued ticket can complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    generation: u64,
    slug: String,
}

impl LookupTicket {
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

pub struct ServiceResolver<'a> {
    services: &'a [ServiceRecord],
    state: DetailState<'a>,
    generation: u64,
}

impl ServiceResolver<'static> {
    pub fn from_catalog() -> Self {
        ServiceResolver::new(catalog::all())
    }
}

impl<'a> ServiceResolver<'a> {
    pub fn new(services: &'a [ServiceRecord]) -> Self {
        ServiceResolver {
            services,
            state: DetailState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> DetailState<'a> {
        self.state
    }

    /// Drops whatever is displayed and invalidates every earlier ticket.
    pub fn begin(&mut self, slug: &str) -> LookupTicket {
        self.generation += 1;
        self.state = DetailState::Loading;
        LookupTicket {
            generation: self.generation,
            slug: slug.to_string(),
        }
    }

    /// Applies the lookup for `ticket` unless a newer one was issued since.
    pub fn complete(&mut self, ticket: &LookupTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.state = DetailState::Resolved(resolve_in(self.services, &ticket.slug));
        true
    }

    pub fn navigate(&mut self, slug: &str) -> DetailState<'a> {
        let ticket = self.begin(slug);
        self.complete(&ticket);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown_slug(state: DetailState<'_>) -> Option<&'static str> {
        match state {
            DetailState::Resolved(Resolution::Found(record)) => Some(record.slug),
            _ => None,
        }
    }

    #[test]
    fn every_catalog_slug_resolves_to_its_record() {
        for service in catalog::all() {
            match resolve(service.slug) {
                Resolution::Found(record) => assert_eq!(record.slug, service.slug),
                Resolution::NotFound => panic!("{} not found", service.slug),
            }
        }
    }

    #[test]
    fn unknown_slugs_are_not_found() {
        for slug in ["", "branding", "WEB-DESIGN", "web-design/", "web-design ", "web", "marketing digital"] {
            assert_eq!(resolve(slug), Resolution::NotFound, "{slug:?}");
        }
        assert!(resolve("nope").record().is_none());
    }

    #[test]
    fn new_resolver_starts_loading() {
        let resolver = ServiceResolver::from_catalog();
        assert_eq!(resolver.state(), DetailState::Loading);
    }

    #[test]
    fn navigation_replaces_the_previous_record() {
        let mut resolver = ServiceResolver::from_catalog();
        assert_eq!(shown_slug(resolver.navigate("web-design")), Some("web-design"));
        assert_eq!(
            shown_slug(resolver.navigate("marketing-digital")),
            Some("marketing-digital")
        );
        assert_eq!(
            resolver.navigate("does-not-exist"),
            DetailState::Resolved(Resolution::NotFound)
        );
    }

    #[test]
    fn begin_clears_the_displayed_record() {
        let mut resolver = ServiceResolver::from_catalog();
        resolver.navigate("web-design");
        let ticket = resolver.begin("design-grafico");
        assert_eq!(ticket.slug(), "design-grafico");
        assert_eq!(resolver.state(), DetailState::Loading);
    }

    #[test]
    fn stale_lookups_are_discarded() {
        let mut resolver = ServiceResolver::from_catalog();
        let first = resolver.begin("web-design");
        let second = resolver.begin("gestao-de-conteudo");

        assert!(!resolver.complete(&first));
        assert_eq!(resolver.state(), DetailState::Loading);

        assert!(resolver.complete(&second));
        assert_eq!(shown_slug(resolver.state()), Some("gestao-de-conteudo"));

        assert!(!resolver.complete(&first));
        assert_eq!(shown_slug(resolver.state()), Some("gestao-de-conteudo"));
    }

    #[test]
    fn resolve_in_uses_the_given_slice() {
        let services = &catalog::all()[..1];
        assert!(matches!(resolve_in(services, services[0].slug), Resolution::Found(_)));
        assert_eq!(resolve_in(services, "web-design"), Resolution::NotFound);
    }
}
