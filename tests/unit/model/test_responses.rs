use css_accounts_client::prelude::*;
use serde_json::json;

#[test]
fn test_account_from_server_json() {
    let body = json!({
        "name": "accounts/111",
        "fullName": "Example Shopping",
        "displayName": "Example",
        "homepageUri": "https://shop.example",
        "parent": "accounts/100",
        "labelIds": ["7", "8"],
        "automaticLabelIds": ["9"],
        "accountType": 7
    });

    let account: Account = serde_json::from_value(body).unwrap();
    assert_eq!(account.account_id(), Some("111"));
    assert_eq!(account.display_name.as_deref(), Some("Example"));
    assert_eq!(account.homepage_uri, "https://shop.example");
    assert_eq!(account.parent.as_deref(), Some("accounts/100"));
    assert_eq!(account.label_ids, vec![7, 8]);
    assert_eq!(account.automatic_label_ids, vec![9]);
    assert_eq!(account.account_type, AccountType::McStandalone);
}

#[test]
fn test_account_round_trips_through_display() {
    let account = Account {
        name: "accounts/2".to_string(),
        full_name: "Two".to_string(),
        account_type: AccountType::CssGroup,
        ..Default::default()
    };
    let text = account.to_string();
    let back: Account = serde_json::from_str(&text).unwrap();
    assert_eq!(back, account);
}

#[test]
fn test_list_response_with_accounts() {
    let body = json!({
        "accounts": [
            {"name": "accounts/1", "accountType": "CSS_DOMAIN"},
            {"name": "accounts/2", "accountType": 4}
        ],
        "nextPageToken": "abc"
    });
    let resp: ListChildAccountsResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.accounts.len(), 2);
    assert_eq!(resp.accounts[0].account_type, AccountType::CssDomain);
    assert_eq!(resp.accounts[1].account_type, AccountType::McCssMca);
    assert!(resp.has_next_page());
}

#[test]
fn test_account_type_names() {
    assert_eq!(AccountType::McMcaSubaccount.to_string(), "MC_MCA_SUBACCOUNT");
    assert_eq!(AccountType::from_value(3), AccountType::McPrimaryCssMca);
    assert_eq!(AccountType::from_str_name("MC_OTHER_MCA"), Some(AccountType::McOtherMca));
    assert_eq!(AccountType::Unrecognized(77).to_string(), "77");
}
