use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::genre::handler::list_genres,
        crate::modules::movie::handler::list_popular,
        crate::modules::movie::handler::list_cached,
        crate::modules::movie::handler::search_movies,
        crate::modules::movie::handler::get_movie,
        crate::modules::movie::handler::get_trailer,
        crate::modules::movie::handler::get_image,
        crate::modules::feed::handler::get_feed,
        crate::modules::feed::handler::load_feed,
        crate::modules::feed::handler::load_more,
        crate::modules::feed::handler::refresh_feed,
        crate::modules::feed::handler::search_feed,
        crate::modules::feed::handler::sort_feed,
        crate::modules::feed::handler::list_sort_options,
    ),
    components(
        schemas(
            crate::common::error::ErrorBody,
            crate::modules::genre::dto::GenreResponse,
            crate::modules::movie::dto::MovieResponse,
            crate::modules::movie::dto::MovieDetailsResponse,
            crate::modules::movie::dto::MovieDetailsViewResponse,
            crate::modules::movie::dto::TrailerResponse,
            crate::modules::movie::dto::ImageResponse,
            crate::modules::movie::model::SortOption,
            crate::modules::movie::model::RatingTier,
            crate::modules::movie::model::ImageKind,
            crate::modules::movie::model::ImageSize,
            crate::modules::feed::dto::FeedResponse,
            crate::modules::feed::dto::FeedSearchRequest,
            crate::modules::feed::dto::FeedSortRequest,
            crate::modules::feed::dto::SortOptionResponse,
            crate::modules::feed::state::LoadingPhase,
            crate::modules::feed::state::UserFlow,
        )
    ),
    tags(
        (name = "Movies", description = "Catalog reads with offline fallback"),
        (name = "Feed", description = "Popular feed session: paging, search, sorting")
    )
)]
pub struct ApiDoc;
