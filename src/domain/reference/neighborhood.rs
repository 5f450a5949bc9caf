// src/domain/reference/neighborhood.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    pub slug: &'static str,
    /// Display name, also the value stored in `activities.neighborhood`.
    pub name: &'static str,
}

pub const NEIGHBORHOODS: &[Neighborhood] = &[
    Neighborhood { slug: "capitole", name: "Capitole" },
    Neighborhood { slug: "carmes", name: "Carmes" },
    Neighborhood { slug: "saint-cyprien", name: "Saint-Cyprien" },
    Neighborhood { slug: "compans-caffarelli", name: "Compans-Caffarelli" },
    Neighborhood { slug: "borderouge", name: "Borderouge" },
    Neighborhood { slug: "rangueil", name: "Rangueil" },
    Neighborhood { slug: "minimes", name: "Minimes" },
    Neighborhood { slug: "arnaud-bernard", name: "Arnaud-Bernard" },
    Neighborhood { slug: "jolimont", name: "Jolimont" },
    Neighborhood { slug: "empalot", name: "Empalot" },
];

impl Neighborhood {
    pub fn find_by_slug(slug: &str) -> Option<&'static Self> {
        NEIGHBORHOODS.iter().find(|n| n.slug == slug)
    }

    /// Every neighborhood except `self`, in table order.
    pub fn others(&self) -> impl Iterator<Item = &'static Self> + '_ {
        NEIGHBORHOODS.iter().filter(move |n| n.slug != self.slug)
    }
}
