use actix_files::{Files, NamedFile};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Result};
use once_cell::sync::Lazy;
use rustls::{
    pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer},
    server::ServerConfig,
};
use rustls_pemfile::{certs, pkcs8_private_keys};
use std::{env, fs::File, io::BufReader, path::PathBuf};

/* ---------- configuration (env with dev defaults) ------------------------ */

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Directory produced by `trunk build` in the frontend crate.
static DIST_DIR: Lazy<PathBuf> = Lazy::new(|| {
    env::var("RANKUP_DIST")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../frontend/dist"))
});

/* ---------- self-signed dev TLS ------------------------------------------ */

static TLS_CFG: Lazy<ServerConfig> = Lazy::new(|| {
    let cert_path = env_or("RANKUP_TLS_CERT", "certs/dev-cert.pem");
    let key_path = env_or("RANKUP_TLS_KEY", "certs/dev-key.pem");

    let mut r = BufReader::new(File::open(&cert_path).expect("open cert"));
    let certs: Vec<CertificateDer<'static>> =
        certs(&mut r).collect::<Result<_, _>>().expect("parse cert");

    let mut r = BufReader::new(File::open(&key_path).expect("open key"));
    let key: PrivatePkcs8KeyDer<'static> = pkcs8_private_keys(&mut r)
        .next()
        .expect("one key")
        .expect("valid pkcs8 key");

    ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, PrivateKeyDer::Pkcs8(key))
        .expect("TLS config")
});

/* ---------- SPA fallback -------------------------------------------------- */

/// Deep links (/scoreboard/total, /admin/events/…) must land on index.html;
/// the router takes it from there.
async fn spa_fallback(req: HttpRequest) -> Result<HttpResponse> {
    Ok(NamedFile::open(DIST_DIR.join("index.html"))?.into_response(&req))
}

/* ---------- main ---------------------------------------------------------- */

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let port: u16 = env_or("RANKUP_PORT", "8444").parse().expect("numeric port");
    println!("Serving RankUp from {} on port {port}", DIST_DIR.display());

    HttpServer::new(|| {
        App::new()
            .service(Files::new("/", &*DIST_DIR).index_file("index.html"))
            .default_service(web::to(spa_fallback))
    })
    .bind_rustls_0_23(("0.0.0.0", port), TLS_CFG.clone())?
    .run()
    .await
}
