// Thin delegating binary.
//
// The actual server assembly lives in the `swagger-server` crate.
#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    swagger_server::run().await
}
