use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, response::Html, routing::get};

use crate::modules::meeting_invoices::core::ports::Credential;
pub use crate::modules::meeting_invoices::use_cases::generate_invoice::inbound::graphql::QueryRoot;
use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(state)
        .finish()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/gql", get(graphiql).post(execute))
        .layer(Extension(schema(state)))
}

async fn execute(
    Extension(schema): Extension<AppSchema>,
    credential: Credential,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema
        .execute(request.into_inner().data(credential))
        .await
        .into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
