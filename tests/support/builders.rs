// tests/support/builders.rs
use activity_around::domain::activity::{
    Activity, ActivityId, ActivityName, Category, Coordinates,
};
use chrono::{DateTime, Utc};

use super::mocks::fixed_now;

pub struct ActivityBuilder {
    id: i64,
    name: String,
    category: Category,
    subcategory: Option<String>,
    address: String,
    phone: Option<String>,
    website: Option<String>,
    coordinates: Option<(f64, f64)>,
    neighborhood: Option<String>,
    updated_at: DateTime<Utc>,
}

impl ActivityBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            name: "Club de Judo".into(),
            category: Category::Sport,
            subcategory: Some("Arts martiaux".into()),
            address: "1 place du Capitole, 31000 Toulouse".into(),
            phone: None,
            website: None,
            coordinates: None,
            neighborhood: None,
            updated_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn intellectual(mut self) -> Self {
        self.category = Category::Intellectual;
        self
    }

    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn no_subcategory(mut self) -> Self {
        self.subcategory = None;
        self
    }

    pub fn neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = Some(neighborhood.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn located_at(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some((latitude, longitude));
        self
    }

    pub fn updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = at;
        self
    }

    pub fn build(self) -> Activity {
        Activity {
            id: ActivityId::new(self.id).unwrap(),
            name: ActivityName::new(self.name).unwrap(),
            category: self.category,
            subcategory: self.subcategory,
            address: self.address,
            phone: self.phone,
            website: self.website,
            coordinates: self
                .coordinates
                .and_then(|(lat, lng)| Coordinates::from_columns(Some(lat), Some(lng))),
            neighborhood: self.neighborhood,
            updated_at: self.updated_at,
        }
    }
}

/// A small catalogue spanning both categories and two neighborhoods.
pub fn sample_activities() -> Vec<Activity> {
    vec![
        ActivityBuilder::new()
            .id(1)
            .name("Toulouse Judo Club")
            .subcategory("Arts martiaux")
            .neighborhood("Capitole")
            .phone("05 61 00 00 00")
            .website("https://judo.example.org")
            .located_at(43.6045, 1.4440)
            .build(),
        ActivityBuilder::new()
            .id(2)
            .name("Basket Carmes")
            .subcategory("Basketball")
            .neighborhood("Carmes")
            .build(),
        ActivityBuilder::new()
            .id(3)
            .name("Yoga du Canal")
            .no_subcategory()
            .build(),
        ActivityBuilder::new()
            .id(4)
            .name("Échecs & Jeux")
            .intellectual()
            .subcategory("Échecs")
            .neighborhood("Capitole")
            .build(),
        ActivityBuilder::new()
            .id(5)
            .name("Cercle de Lecture")
            .intellectual()
            .subcategory("")
            .build(),
    ]
}
