/// A lettered route code of the feed and the numbered route it publishes as.
/// The feed ships each direction of these routes as its own route.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteAlias {
    pub codes: &'static [&'static str],
    pub id: i64,
    pub short_name: &'static str,
    pub long_name: &'static str,
}

pub const ROUTE_ALIASES: &[RouteAlias] = &[
    RouteAlias {
        codes: &["ZCN", "ZCS"],
        id: 1_003,
        short_name: "ZC",
        long_name: "Inter Centre",
    },
    RouteAlias {
        codes: &["ZNN", "ZNS"],
        id: 1_014,
        short_name: "ZN",
        long_name: "Inter Nord",
    },
];

pub fn alias_by_code(code: &str) -> Option<&'static RouteAlias> {
    ROUTE_ALIASES
        .iter()
        .find(|alias| alias.codes.contains(&code))
}

pub fn alias_by_id(id: i64) -> Option<&'static RouteAlias> {
    ROUTE_ALIASES.iter().find(|alias| alias.id == id)
}
