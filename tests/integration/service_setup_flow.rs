use anyhow::Result;
use firewall::ipset;
use firewall::SetType;
use serde_json::json;
use service_registry::{RegistryError, Service, ServiceConfig, ServiceRegistry};
use std::net::IpAddr;

struct TunnelService {
    allowlist_args: Vec<Vec<String>>,
    running: bool,
}

impl TunnelService {
    fn from_config(config: &ServiceConfig) -> Result<Self, RegistryError> {
        let set_name = config
            .options
            .get("allowlist_set")
            .and_then(|v| v.as_str())
            .ok_or_else(|| RegistryError::InvalidOptions("allowlist_set is required".to_string()))?;

        let mut args = vec![ipset::op_set_create(
            set_name,
            SetType::hash_ip(),
            None,
            Some(1024),
        )];
        if let Some(peers) = config.options.get("peers").and_then(|v| v.as_array()) {
            for peer in peers {
                let ip: IpAddr = peer
                    .as_str()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| RegistryError::InvalidOptions("bad peer address".to_string()))?;
                args.push(ipset::op_set_ip_add(set_name, ip));
            }
        }

        Ok(TunnelService {
            allowlist_args: args,
            running: false,
        })
    }
}

impl Service for TunnelService {
    fn service_type(&self) -> String {
        "tunnel".to_string()
    }

    fn start(&mut self) -> Result<(), RegistryError> {
        if self.running {
            return Err(RegistryError::InvalidOptions("already running".to_string()));
        }
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), RegistryError> {
        if !self.running {
            return Err(RegistryError::InvalidOptions("not running".to_string()));
        }
        self.running = false;
        Ok(())
    }
}

fn build_registry() -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    registry.register("tunnel", Box::new(|config| {
        Ok(Box::new(TunnelService::from_config(config)?) as Box<dyn Service>)
    }));
    registry
}

#[test]
fn registry_creates_service_and_builds_allowlist_commands() -> Result<()> {
    let registry = build_registry();

    let config = ServiceConfig {
        service_type: "tunnel".to_string(),
        options: json!({
            "allowlist_set": "tunnel-peers",
            "peers": ["10.0.0.1", "10.0.0.2"],
        }),
    };

    let mut service = registry.create(&config)?;
    assert_eq!(service.service_type(), "tunnel");
    service.start()?;
    service.stop()?;

    Ok(())
}

#[test]
fn unsupported_type_is_a_branchable_error() {
    let registry = build_registry();

    let config = ServiceConfig {
        service_type: "quantum-tunnel".to_string(),
        options: serde_json::Value::Null,
    };

    match registry.create(&config) {
        Err(RegistryError::UnsupportedServiceType(t)) => assert_eq!(t, "quantum-tunnel"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("creation must fail for an unregistered type"),
    }
}

#[test]
fn invalid_options_surface_as_typed_errors() {
    let registry = build_registry();

    let config = ServiceConfig {
        service_type: "tunnel".to_string(),
        options: json!({"peers": ["10.0.0.1"]}),
    };

    assert!(matches!(
        registry.create(&config),
        Err(RegistryError::InvalidOptions(_))
    ));
}

#[test]
fn allowlist_args_match_the_external_tool_grammar() {
    let config = ServiceConfig {
        service_type: "tunnel".to_string(),
        options: json!({
            "allowlist_set": "tunnel-peers",
            "peers": ["10.0.0.1"],
        }),
    };

    let service = TunnelService::from_config(&config).unwrap();
    assert_eq!(
        service.allowlist_args,
        vec![
            vec!["create", "tunnel-peers", "hash:ip", "--hashsize", "1024"],
            vec!["add", "tunnel-peers", "10.0.0.1"],
        ]
    );
}
