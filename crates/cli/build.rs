use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("newsroll")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build a newsletter (HTML) from 2-10 article URLs (same domain)")
        .arg(clap::arg!([URL] ... "Article URLs (same domain). If empty, reads them from --urls-file"))
        .arg(
            clap::arg!(--template <FILE> "HTML template file with {{KEY}} placeholders")
                .default_value("newsletter_template.html")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--out <FILE> "Output HTML file (overwritten if it exists)")
                .default_value("newsletter_output.html")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--"urls-file" <FILE> "Newline-separated URL list used when no URLs are given")
                .default_value("urls.txt")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("15"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(--"blurb-len" <NUM> "Maximum blurb length in characters").default_value("220"))
        .arg(clap::arg!(--"dump-context" "Print the template context as JSON to stdout"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "newsroll", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "newsroll", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "newsroll", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "newsroll", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
