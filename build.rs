#[allow(clippy::print_stdout)]
fn main() {
    let version = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let stamp = chrono::Utc::now().format("%Y%m%d%H%M");
    println!("cargo:rustc-env=BUILD_VERSION={version}+{stamp}");
    println!("cargo:rerun-if-env-changed=TEPLICA_AP_SSID");
    println!("cargo:rerun-if-env-changed=TEPLICA_AP_PASSWORD");
}
