#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // res/lunatracker.ico must exist for release builds on Windows
    let mut res = WindowsResource::new();
    res.set_icon("res/lunatracker.ico")
        .set("FileDescription", "lunatracker CLI")
        .set("ProductName", "lunatracker")
        .set("OriginalFilename", "lunatracker.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
