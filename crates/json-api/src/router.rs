//! App Router

use salvo::Router;

use crate::{
    auth::{
        middleware,
        roles::{require_admin, require_customer},
    },
    carts, healthcheck, orders, products, users,
};

/// Every API route with its authentication and role gates.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("users")
                .push(Router::with_path("register").post(users::register::handler))
                .push(Router::with_path("login").post(users::login::handler)),
        )
        .push(
            Router::new()
                .hoop(middleware::handler)
                .push(products_router())
                .push(carts_router())
                .push(orders_router()),
        )
}

fn products_router() -> Router {
    Router::with_path("products")
        .get(products::index::handler)
        .push(
            Router::new()
                .hoop(require_admin)
                .post(products::create::handler),
        )
        .push(
            Router::with_path("{title}")
                .hoop(require_admin)
                .put(products::update::handler)
                .delete(products::delete::handler),
        )
        .push(
            Router::with_path("{title}/ratings")
                .hoop(require_customer)
                .post(products::rate::handler),
        )
}

fn carts_router() -> Router {
    Router::with_path("carts")
        .hoop(require_customer)
        .push(Router::with_path("items").post(carts::add_item::handler))
        .push(Router::with_path("items/{product_id}").delete(carts::remove_item::handler))
        .push(Router::with_path("total").get(carts::total::handler))
}

fn orders_router() -> Router {
    Router::with_path("orders")
        .hoop(require_customer)
        .get(orders::index::handler)
        .post(orders::create::handler)
}
