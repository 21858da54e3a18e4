use bulletin_api::bind_addrs;
use bulletin_testkit::test_config;

#[test]
fn loopback_binds_are_accepted() {
	let config = test_config(&std::env::temp_dir());
	let (http_addr, admin_addr) = bind_addrs(&config).expect("Loopback binds must be accepted.");

	assert!(http_addr.ip().is_loopback());
	assert!(admin_addr.ip().is_loopback());
}

#[test]
fn public_bind_requires_loopback_only_when_enforced() {
	let mut config = test_config(&std::env::temp_dir());

	config.service.http_bind = "0.0.0.0:8080".to_string();

	let err = bind_addrs(&config).expect_err("Expected a loopback error.");

	assert!(err.to_string().contains("service.http_bind"), "{err}");

	config.security.bind_localhost_only = false;

	bind_addrs(&config).expect("A public bind is allowed when not enforced.");
}

#[test]
fn admin_bind_is_always_loopback() {
	let mut config = test_config(&std::env::temp_dir());

	config.security.bind_localhost_only = false;
	config.service.admin_bind = "0.0.0.0:9090".to_string();

	let err = bind_addrs(&config).expect_err("Expected a loopback error.");

	assert!(err.to_string().contains("service.admin_bind"), "{err}");
}

#[test]
fn malformed_bind_is_an_error() {
	let mut config = test_config(&std::env::temp_dir());

	config.service.http_bind = "localhost".to_string();

	assert!(bind_addrs(&config).is_err());
}
