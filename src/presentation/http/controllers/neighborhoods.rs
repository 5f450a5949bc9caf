// src/presentation/http/controllers/neighborhoods.rs
use crate::application::queries::activities::ListByNeighborhoodQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::seo::{self, Layout, PageMeta};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{Breadcrumb, NeighborhoodTemplate, count_activities};
use axum::{Extension, extract::Path};

pub async fn neighborhood_page(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<NeighborhoodTemplate> {
    let listing = state
        .services
        .activity_queries
        .list_by_neighborhood(ListByNeighborhoodQuery { slug })
        .await
        .into_http()?;

    let name = listing.neighborhood.name;
    let url = state
        .site
        .absolute_url(&format!("/quartier/{}", listing.neighborhood.slug));

    let meta = PageMeta::new(
        format!("Activités au {name} - Toulouse"),
        format!(
            "Découvrez toutes les activités sportives et intellectuelles dans le quartier {name} à Toulouse. \
             Clubs, associations et loisirs près de chez vous."
        ),
        url.clone(),
    )
    .with_keywords([
        format!("activités {name}"),
        format!("sport {name} Toulouse"),
        format!("club {name}"),
        format!("loisirs {name}"),
        format!("association {name}"),
    ]);

    let collection = seo::collection_page(
        &format!("Activités au {name}"),
        &format!("Trouvez toutes les activités dans le quartier {name} à Toulouse"),
        &url,
        listing.total,
    );

    let counted = count_activities(listing.total);
    let listed = if listing.total > 1 { "répertoriées" } else { "répertoriée" };

    Ok(NeighborhoodTemplate {
        layout: Layout::new(&state.site, meta),
        breadcrumbs: vec![
            Breadcrumb::link("Quartiers", "/#quartiers"),
            Breadcrumb::current(name),
        ],
        subtitle: format!("Découvrez {counted} dans le quartier {name} à Toulouse"),
        seo_paragraphs: vec![
            format!(
                "Le quartier {name} est un des quartiers dynamiques de Toulouse. \
                 Avec {counted} {listed}, vous trouverez de nombreuses opportunités \
                 pour pratiquer un sport ou une activité intellectuelle près de chez vous."
            ),
            format!(
                "Que vous habitiez ou travailliez au {name}, découvrez les clubs et \
                 associations qui vous accueilleront pour votre pratique sportive ou intellectuelle."
            ),
        ],
        collection_json_ld: seo::script_json(&collection),
        listing,
    })
}
