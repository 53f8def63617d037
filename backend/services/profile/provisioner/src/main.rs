// backend/services/profile/provisioner/src/main.rs

use profile::infrastructure::bootstrap::run_provisioner;
use shared_kernel::errors::AppResult;

#[tokio::main]
async fn main() -> AppResult<()> {
    run_provisioner("Profile").await
}
