//! Example: Log in and print the status of every installation on the account.

use prosegur_smart::{AuthConfig, Country, Installation, ProsegurError, SmartAuth};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AuthConfig::builder()
        .user("user@example.com")
        .password("secret")
        .country(Country::Portugal)
        .build();
    let auth = SmartAuth::new(config);

    // Walk the installation list until the index runs past the end
    let mut number = 0;
    loop {
        match Installation::retrieve(&auth, number).await {
            Ok(Some(inst)) => {
                println!(
                    "Installation {}: id={} contract={} status={}",
                    number,
                    inst.installation_id(),
                    inst.contract()?,
                    inst.status()?,
                );
            }
            Ok(None) => {
                println!("Installation list not available");
                break;
            }
            Err(ProsegurError::InstallationIndex { len, .. }) => {
                println!("\n{} installation(s)", len);
                break;
            }
            Err(e) => return Err(e.into()),
        }
        number += 1;
    }

    Ok(())
}
