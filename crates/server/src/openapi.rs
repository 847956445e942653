use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MenuGroupCreateRequestDoc { pub name: String }

#[derive(ToSchema)]
pub struct MenuGroupDoc { pub id: i64, pub name: String }

#[derive(ToSchema)]
pub struct ProductCreateRequestDoc {
    pub name: String,
    #[schema(example = "16000.00")]
    pub price: String,
}

#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: i64,
    pub name: String,
    #[schema(example = "16000.00")]
    pub price: String,
}

#[derive(ToSchema)]
pub struct MenuProductRequestDoc { pub product_id: i64, pub quantity: i64 }

#[derive(ToSchema)]
pub struct MenuCreateRequestDoc {
    pub name: String,
    #[schema(example = "10.00")]
    pub price: String,
    pub menu_group_id: i64,
    pub menu_products: Vec<MenuProductRequestDoc>,
}

#[derive(ToSchema)]
pub struct MenuProductViewDoc { pub seq: i64, pub menu_id: i64, pub product_id: i64, pub quantity: i64 }

#[derive(ToSchema)]
pub struct MenuViewDoc {
    pub id: i64,
    pub name: String,
    #[schema(example = "10.00")]
    pub price: String,
    pub menu_group_id: i64,
    pub menu_products: Vec<MenuProductViewDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::menu_groups::list,
        crate::routes::menu_groups::create,
        crate::routes::products::list,
        crate::routes::products::create,
        crate::routes::menus::list,
        crate::routes::menus::create,
    ),
    components(
        schemas(
            HealthResponse,
            MenuGroupCreateRequestDoc,
            MenuGroupDoc,
            ProductCreateRequestDoc,
            ProductDoc,
            MenuProductRequestDoc,
            MenuCreateRequestDoc,
            MenuProductViewDoc,
            MenuViewDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "menu-groups"),
        (name = "products"),
        (name = "menus")
    )
)]
pub struct ApiDoc;
