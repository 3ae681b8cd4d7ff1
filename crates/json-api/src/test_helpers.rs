//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use storefront_app::{
    auth::{Claim, MockAuthService, Role},
    context::AppContext,
    domain::{
        carts::MockCartsService, checkout::MockCheckoutService, orders::MockOrdersService,
        pricing::MockPricingService, products::MockProductsService, users::MockUsersService,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_CUSTOMER: &str = "ana";

pub(crate) const TEST_ADMIN: &str = "root";

pub(crate) fn customer_claim() -> Claim {
    Claim {
        username: TEST_CUSTOMER.to_string(),
        role: Role::Customer,
        email: "ana@example.com".to_string(),
    }
}

pub(crate) fn admin_claim() -> Claim {
    Claim {
        username: TEST_ADMIN.to_string(),
        role: Role::Admin,
        email: "root@example.com".to_string(),
    }
}

#[salvo::handler]
pub(crate) async fn inject_customer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_claim(customer_claim());
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_claim(admin_claim());
    ctrl.call_next(req, depot, res).await;
}

/// Service mocks. Any call without a matching expectation fails the test.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) auth: MockAuthService,
    pub(crate) users: MockUsersService,
    pub(crate) products: MockProductsService,
    pub(crate) carts: MockCartsService,
    pub(crate) pricing: MockPricingService,
    pub(crate) orders: MockOrdersService,
    pub(crate) checkout: MockCheckoutService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            auth: Arc::new(self.auth),
            users: Arc::new(self.users),
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            pricing: Arc::new(self.pricing),
            orders: Arc::new(self.orders),
            checkout: Arc::new(self.checkout),
        })
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Mocks {
        auth,
        ..Mocks::default()
    }
    .into_state()
}

/// Route without any identity attached.
pub(crate) fn public_service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route))
}

/// Route as seen by an authenticated customer.
pub(crate) fn customer_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject_customer)
            .push(route),
    )
}

/// Route as seen by an authenticated admin.
pub(crate) fn admin_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject_admin)
            .push(route),
    )
}
