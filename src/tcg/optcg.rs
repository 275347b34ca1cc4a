pub struct OptcgApi;

impl OptcgApi {
    pub fn get_api_url() -> &'static str {
        "https://optcgapi.com/api"
    }

    /// Image ids of parallel / alternate art printings contain this marker
    /// (`OP01-001_p1`, `OP05-119_p2`, ...).
    pub fn variant_marker() -> &'static str {
        "_p"
    }
}

/// All known main set ids.
pub const SET_IDS: [&str; 17] = [
    "OP-01", "OP-02", "OP-03", "OP-04", "OP-05", "OP-06", "OP-07", "OP-08", "OP-09", "OP-10",
    "OP-11", "OP-12", "OP-13", "OP-14", "EB-01", "EB-02", "PRB-01",
];

/// All known starter deck ids.
pub const ST_IDS: [&str; 21] = [
    "ST-01", "ST-02", "ST-03", "ST-04", "ST-05", "ST-06", "ST-07", "ST-08", "ST-09", "ST-10",
    "ST-11", "ST-12", "ST-13", "ST-14", "ST-15", "ST-16", "ST-17", "ST-18", "ST-19", "ST-20",
    "ST-21",
];

/// Where a batch of cards comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// One request for the whole group, falling back to one request per id
    /// when the bulk endpoint returns nothing usable.
    Bulk {
        label: &'static str,
        bulk_path: &'static str,
        item_prefix: &'static str,
        item_ids: &'static [&'static str],
    },
    /// A single request with no fallback.
    Single {
        label: &'static str,
        path: &'static str,
    },
}

impl Source {
    pub fn label(&self) -> &'static str {
        match self {
            Source::Bulk { label, .. } | Source::Single { label, .. } => label,
        }
    }
}

/// Path of a per-item endpoint, e.g. `sets/OP-01/`.
pub fn item_path(prefix: &str, id: &str) -> String {
    format!("{}/{}/", prefix, id)
}

/// Sources in the order they are fetched. Promos are fetched last on their
/// own; anything already seen in the bulk groups is ignored there.
pub fn sources() -> Vec<Source> {
    vec![
        Source::Bulk {
            label: "sets",
            bulk_path: "allSetCards/",
            item_prefix: "sets",
            item_ids: &SET_IDS,
        },
        Source::Bulk {
            label: "starter decks",
            bulk_path: "allSTCards/",
            item_prefix: "decks",
            item_ids: &ST_IDS,
        },
        Source::Single {
            label: "promos (PRB-01)",
            path: "sets/PRB-01/",
        },
    ]
}
