// src/presentation/http/controllers/categories.rs
use crate::application::queries::activities::ListByCategoryQuery;
use crate::domain::activity::Category;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::seo::{self, Layout, PageMeta};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{Breadcrumb, CategoryTemplate};
use axum::Extension;

/// Fixed wording of a category listing page.
struct CategoryCopy {
    title: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
    heading: &'static str,
    collection_description: &'static str,
    nav_heading: &'static str,
    seo_heading: &'static str,
}

const SPORT_COPY: CategoryCopy = CategoryCopy {
    title: "Activités Sportives à Toulouse - Tous les Clubs et Associations",
    description: "Découvrez tous les clubs sportifs et associations à Toulouse : football, basketball, tennis, arts martiaux, yoga, danse et plus encore. Trouvez votre activité sportive idéale.",
    keywords: &[
        "sport Toulouse",
        "club sportif Toulouse",
        "activités sportives Toulouse",
        "football Toulouse",
        "basketball Toulouse",
        "tennis Toulouse",
        "arts martiaux Toulouse",
        "yoga Toulouse",
        "danse Toulouse",
    ],
    heading: "Activités Sportives à Toulouse",
    collection_description: "Trouvez tous les clubs sportifs et associations à Toulouse",
    nav_heading: "Catégories sportives",
    seo_heading: "Pourquoi pratiquer une activité sportive à Toulouse ?",
};

const INTELLECTUAL_COPY: CategoryCopy = CategoryCopy {
    title: "Activités Intellectuelles à Toulouse - Clubs et Associations",
    description: "Découvrez tous les clubs et associations d'activités intellectuelles à Toulouse : échecs, jeux de société, lecture, débats, langues et plus encore. Stimulez votre esprit.",
    keywords: &[
        "activités intellectuelles Toulouse",
        "club échecs Toulouse",
        "jeux de société Toulouse",
        "club lecture Toulouse",
        "cours langues Toulouse",
        "débats Toulouse",
        "club bridge Toulouse",
    ],
    heading: "Activités Intellectuelles à Toulouse",
    collection_description: "Trouvez tous les clubs et associations d'activités intellectuelles à Toulouse",
    nav_heading: "Catégories d'activités intellectuelles",
    seo_heading: "Les activités intellectuelles à Toulouse",
};

impl CategoryCopy {
    fn for_category(category: Category) -> &'static Self {
        match category {
            Category::Sport => &SPORT_COPY,
            Category::Intellectual => &INTELLECTUAL_COPY,
        }
    }

    fn subtitle(&self, category: Category, total: usize) -> String {
        match category {
            Category::Sport => format!(
                "Découvrez {total} clubs sportifs et associations à Toulouse. \
                 Du football au yoga, trouvez l'activité sportive qui vous correspond."
            ),
            Category::Intellectual => format!(
                "Découvrez {total} clubs et associations d'activités intellectuelles à Toulouse. \
                 Échecs, jeux de société, lecture et bien plus pour stimuler votre esprit."
            ),
        }
    }

    fn seo_paragraphs(&self, category: Category, total: usize) -> Vec<String> {
        match category {
            Category::Sport => vec![
                format!(
                    "Toulouse, la Ville Rose, offre un cadre exceptionnel pour la pratique sportive. \
                     Avec plus de {total} clubs et associations, vous trouverez forcément \
                     l'activité qui correspond à vos envies et votre niveau."
                ),
                "Que vous cherchiez un sport d'équipe comme le football ou le basketball, \
                 une discipline individuelle comme le tennis ou la natation, ou une activité \
                 bien-être comme le yoga ou la danse, Toulouse dispose d'infrastructures \
                 de qualité et de professionnels passionnés."
                    .to_string(),
            ],
            Category::Intellectual => vec![
                format!(
                    "Toulouse, ville universitaire et culturelle, offre un environnement riche pour \
                     les activités intellectuelles. Avec {total} clubs et associations, \
                     vous trouverez de nombreuses opportunités pour développer vos capacités cognitives \
                     et rencontrer des passionnés."
                ),
                "Que vous soyez attiré par les échecs, le bridge, les jeux de stratégie, la lecture, \
                 les débats philosophiques ou l'apprentissage de langues, Toulouse dispose \
                 d'une communauté active et accueillante pour chaque discipline."
                    .to_string(),
            ],
        }
    }
}

pub async fn sport_page(Extension(state): Extension<HttpState>) -> HttpResult<CategoryTemplate> {
    category_page(&state, Category::Sport).await
}

pub async fn intellectual_page(
    Extension(state): Extension<HttpState>,
) -> HttpResult<CategoryTemplate> {
    category_page(&state, Category::Intellectual).await
}

async fn category_page(state: &HttpState, category: Category) -> HttpResult<CategoryTemplate> {
    let listing = state
        .services
        .activity_queries
        .list_by_category(ListByCategoryQuery { category })
        .await
        .into_http()?;

    let copy = CategoryCopy::for_category(category);
    let url = state
        .site
        .absolute_url(&format!("/{}", category.route_segment()));

    let collection = seo::collection_page(
        copy.heading,
        copy.collection_description,
        &url,
        listing.total,
    );
    let meta =
        PageMeta::new(copy.title, copy.description, url).with_keywords(copy.keywords.iter().copied());

    Ok(CategoryTemplate {
        layout: Layout::new(&state.site, meta),
        breadcrumbs: vec![Breadcrumb::current(category.label())],
        heading: copy.heading,
        subtitle: copy.subtitle(category, listing.total),
        nav_heading: copy.nav_heading,
        seo_heading: copy.seo_heading,
        seo_paragraphs: copy.seo_paragraphs(category, listing.total),
        collection_json_ld: seo::script_json(&collection),
        listing,
    })
}
