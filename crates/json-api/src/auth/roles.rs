//! Role gates.
//!
//! Each gate admits exactly one role. They run after the auth middleware.

use salvo::prelude::*;
use storefront_app::auth::{Role, authorize};

use crate::{auth::access_status_error, extensions::*};

fn gate(required: Role, depot: &mut Depot, res: &mut Response, ctrl: &mut FlowCtrl) {
    let decision = depot
        .claim_or_401()
        .and_then(|claim| authorize(claim, required).map_err(access_status_error));

    if let Err(error) = decision {
        res.render(error);
        ctrl.skip_rest();
    }
}

#[salvo::handler]
pub(crate) async fn require_admin(depot: &mut Depot, res: &mut Response, ctrl: &mut FlowCtrl) {
    gate(Role::Admin, depot, res, ctrl);
}

#[salvo::handler]
pub(crate) async fn require_customer(depot: &mut Depot, res: &mut Response, ctrl: &mut FlowCtrl) {
    gate(Role::Customer, depot, res, ctrl);
}
