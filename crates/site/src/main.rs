//! Binary entrypoint for the browser-hosted CloudDrive dashboard.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `site_app` for wasm32 with the `csr` feature and serve it next to the API at {}.",
        drive_web::DEFAULT_API_URL
    );
}
