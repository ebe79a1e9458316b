//! Reference-data wrappers: venues, categories and products share one
//! CRUD shape.

use yugam_core::AppResult;
use yugam_entity::catalog::{CategoryRequest, ProductRequest, VenueRequest};
use yugam_entity::{Category, Product, Venue};

use crate::http::HttpClient;

macro_rules! crud_api {
    ($(#[$doc:meta])* $name:ident, $resource:literal, $model:ty, $request:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            http: &'a HttpClient,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(http: &'a HttpClient) -> Self {
                Self { http }
            }

            pub async fn get_all(self) -> AppResult<Vec<$model>> {
                self.http.get(&[$resource]).await
            }

            pub async fn get_by_id(self, id: &str) -> AppResult<$model> {
                self.http.get(&[$resource, id]).await
            }

            pub async fn create(self, req: &$request) -> AppResult<$model> {
                self.http.post(&[$resource], req).await
            }

            pub async fn update(self, id: &str, req: &$request) -> AppResult<$model> {
                self.http.put(&[$resource, id], req).await
            }

            pub async fn delete(self, id: &str) -> AppResult<()> {
                self.http.delete(&[$resource, id]).await
            }
        }
    };
}

crud_api!(
    /// `/venues` wrapper.
    VenuesApi, "venues", Venue, VenueRequest
);
crud_api!(
    /// `/categories` wrapper.
    CategoriesApi, "categories", Category, CategoryRequest
);
crud_api!(
    /// `/products` wrapper.
    ProductsApi, "products", Product, ProductRequest
);
