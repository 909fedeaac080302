//! Calls `CreateUser` against a running server and prints the reply.

use clap::Parser;
use tonic::metadata::MetadataValue;
use tonic::Request;
use uuid::Uuid;

use common::REQUEST_ID_HEADER;
use proto::users::v1::CreateUserRequest;
use proto::UsersServiceClient;

#[derive(Parser)]
#[command(name = "grpc-client")]
#[command(about = "Create a user over gRPC")]
struct Cli {
    #[arg(long, default_value = "http://localhost:3002")]
    address: String,
    #[arg(long, default_value = "other")]
    username: String,
    #[arg(long, default_value = "otherLongPassword")]
    password: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut client = UsersServiceClient::connect(cli.address).await?;

    let request_id = Uuid::new_v4().simple().to_string();
    let mut request = Request::new(CreateUserRequest {
        username: cli.username,
        password: cli.password,
    });
    request
        .metadata_mut()
        .insert(REQUEST_ID_HEADER, MetadataValue::try_from(request_id.as_str())?);

    match client.create_user(request).await {
        Ok(response) => {
            let user = response.into_inner().user.unwrap_or_default();
            println!("created user {} ({})", user.username, user.id);
        }
        Err(status) => {
            eprintln!(
                "request {} failed: {:?} {}",
                request_id,
                status.code(),
                status.message()
            );
        }
    }

    Ok(())
}
