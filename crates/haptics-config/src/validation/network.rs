//! Network and transform validation.

use std::net::IpAddr;

use crate::schema::HapticsConfig;

use super::helpers::{validate_finite, validate_range};

/// Validate ingress socket settings.
pub(crate) fn validate_network(errors: &mut Vec<String>, config: &HapticsConfig) {
    let net = &config.network;

    if net.bind_address.parse::<IpAddr>().is_err() {
        errors.push(format!(
            "network.bind_address = {:?} is not an IP address",
            net.bind_address
        ));
    }
    validate_range(
        errors,
        "network.remote_port",
        u32::from(net.remote_port),
        1,
        65535,
    );
    validate_range(
        errors,
        "network.max_datagrams_per_poll",
        net.max_datagrams_per_poll,
        1,
        4096,
    );
}

/// Validate the raw-to-scene transform.
pub(crate) fn validate_transform(errors: &mut Vec<String>, config: &HapticsConfig) {
    validate_finite(errors, "transform.scale", config.transform.scale);
    validate_finite(errors, "transform.shift", config.transform.shift);
}
