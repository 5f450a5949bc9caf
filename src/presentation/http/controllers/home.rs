// src/presentation/http/controllers/home.rs
use crate::application::dto::NeighborhoodRef;
use crate::domain::activity::Category;
use crate::domain::reference::NEIGHBORHOODS;
use crate::presentation::http::seo::{Layout, PageMeta, SITE_NAME};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{CategoryLink, HomeTemplate};
use axum::Extension;

fn blurb(category: Category) -> &'static str {
    match category {
        Category::Sport => "Football, basketball, tennis, arts martiaux, yoga, danse et plus encore.",
        Category::Intellectual => "Échecs, jeux de société, lecture, débats, langues et plus encore.",
    }
}

pub async fn home_page(Extension(state): Extension<HttpState>) -> HomeTemplate {
    let meta = PageMeta::new(
        format!("{SITE_NAME} - Activités sportives et intellectuelles à Toulouse"),
        "Trouvez les clubs et associations sportives et intellectuelles à Toulouse, \
         classés par discipline et par quartier.",
        state.site.absolute_url("/"),
    );

    HomeTemplate {
        layout: Layout::new(&state.site, meta),
        categories: Category::ALL
            .iter()
            .map(|category| CategoryLink {
                href: format!("/{}", category.route_segment()),
                label: category.label(),
                blurb: blurb(*category),
            })
            .collect(),
        neighborhoods: NEIGHBORHOODS.iter().map(NeighborhoodRef::from).collect(),
    }
}
