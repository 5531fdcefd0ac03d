//! Example: Arm and disarm the first installation.

use prosegur_smart::{AuthConfig, Country, Installation, SmartAuth};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = AuthConfig::builder()
        .user("user@example.com")
        .password("secret")
        .country(Country::Spain)
        .build();
    let auth = SmartAuth::new(config);

    let Some(inst) = Installation::retrieve(&auth, 0).await? else {
        anyhow::bail!("no installation available");
    };
    println!("Installation {} is {}", inst.installation_id(), inst.status()?);

    println!("\nArming...");
    match inst.arm(&auth).await {
        Ok(true) => println!("Arm accepted"),
        Ok(false) => println!("Arm rejected"),
        Err(e) => println!("Error arming: {}", e),
    }

    // The handle keeps its snapshot; fetch again to see the new state
    tokio::time::sleep(tokio::time::Duration::from_secs(5)).await;
    let Some(inst) = Installation::retrieve(&auth, 0).await? else {
        anyhow::bail!("no installation available");
    };
    println!("Installation {} is now {}", inst.installation_id(), inst.status()?);

    println!("\nDisarming...");
    match inst.disarm(&auth).await {
        Ok(true) => println!("Disarm accepted"),
        Ok(false) => println!("Disarm rejected"),
        Err(e) => println!("Error disarming: {}", e),
    }

    Ok(())
}
