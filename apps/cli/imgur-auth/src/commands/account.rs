use crate::error::CliError;
use crate::session::Session;

use imgur_client::endpoints::AccountQuery;

use models::Account;

pub async fn whoami(session: &Session) -> Result<Account, CliError> {
    Ok(session
        .client()
        .account()
        .get_account(&AccountQuery::default())
        .await?)
}

pub fn describe_account(account: &Account) -> String {
    let mut description = format!(
        "{username} (id {id}), reputation {reputation}, member since {created}",
        username = account.url,
        id = account.id,
        reputation = account.reputation,
        created = account.created.format("%Y-%m-%d"),
    );
    if let Some(bio) = account.bio.as_deref().filter(|bio| !bio.is_empty()) {
        description.push('\n');
        description.push_str(bio);
    }
    description
}
