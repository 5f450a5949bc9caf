// src/domain/reference/city.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub slug: &'static str,
    pub name: &'static str,
}

pub const CITIES: &[City] = &[
    City { slug: "toulouse", name: "Toulouse" },
    City { slug: "paris", name: "Paris" },
    City { slug: "lyon", name: "Lyon" },
    City { slug: "marseille", name: "Marseille" },
    City { slug: "bordeaux", name: "Bordeaux" },
    City { slug: "lille", name: "Lille" },
    City { slug: "nantes", name: "Nantes" },
    City { slug: "strasbourg", name: "Strasbourg" },
    City { slug: "montpellier", name: "Montpellier" },
    City { slug: "nice", name: "Nice" },
    City { slug: "rennes", name: "Rennes" },
    City { slug: "reims", name: "Reims" },
    City { slug: "grenoble", name: "Grenoble" },
    City { slug: "dijon", name: "Dijon" },
    City { slug: "angers", name: "Angers" },
    City { slug: "nimes", name: "Nîmes" },
    City { slug: "clermont-ferrand", name: "Clermont-Ferrand" },
    City { slug: "le-havre", name: "Le Havre" },
    City { slug: "saint-etienne", name: "Saint-Étienne" },
    City { slug: "toulon", name: "Toulon" },
];
