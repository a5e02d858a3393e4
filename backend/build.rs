use std::fs;
use std::path::Path;

/// Copies the compiled form (`trunk build` output) into `static/dist`, where
/// `include_dir!` embeds it. Without a build the placeholder page is kept.
fn main() {
    let embed_dir = Path::new("static/dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(embed_dir);
        fs::create_dir_all(embed_dir).expect("create static/dist");
        fs_extra::dir::copy(
            dist_dir,
            embed_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).content_only(true),
        )
            .expect("copy frontend/dist");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
