#[cfg(test)]
pub mod helpers {
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage};
    use cosmwasm_std::{coins, from_json, Env, OwnedDeps, Response, Uint128};

    use crate::contract::{execute, instantiate, query};
    use crate::error::ContractError;
    use crate::msg::*;

    pub const OWNER: &str = "owner";
    pub const DEVELOPER: &str = "developer";
    pub const K9WT_TOKEN: &str = "k9wt_token";
    pub const BUYER: &str = "buyer_native";
    pub const BUYER_TWO: &str = "buyer_native_two";
    pub const RANDOM_USER: &str = "random_user";
    pub const DENOM: &str = "uaxm";
    pub const UNIT_PRICE: u128 = 15_000;

    pub type MockDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

    pub fn default_instantiate_msg() -> InstantiateMsg {
        InstantiateMsg {
            k9wt_token: K9WT_TOKEN.to_string(),
            developer: DEVELOPER.to_string(),
            native_denom: DENOM.to_string(),
            native_price_per_guardian: Uint128::new(UNIT_PRICE),
            k9wt_price_per_guardian: Uint128::new(200_000),
            base_uri: String::new(),
            dark_theme_uri: String::new(),
        }
    }

    pub fn setup_contract() -> (MockDeps, Env) {
        let mut deps = mock_dependencies();
        let env = mock_env();
        let info = mock_info(OWNER, &[]);

        let res = instantiate(deps.as_mut(), env.clone(), info, default_instantiate_msg()).unwrap();
        assert_eq!(res.attributes.len(), 5);

        (deps, env)
    }

    pub fn exec(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        msg: ExecuteMsg,
    ) -> Result<Response, ContractError> {
        let info = mock_info(sender, &[]);
        execute(deps.as_mut(), env.clone(), info, msg)
    }

    pub fn start_sale(deps: &mut MockDeps, env: &Env) {
        exec(deps, env, OWNER, ExecuteMsg::StartSale {}).unwrap();
    }

    pub fn buy_with_native(
        deps: &mut MockDeps,
        env: &Env,
        buyer: &str,
        count: u32,
        payment: u128,
    ) -> Result<Response, ContractError> {
        let funds = if payment == 0 { vec![] } else { coins(payment, DENOM) };
        let info = mock_info(buyer, &funds);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::BuyWithNative { count },
        )
    }

    pub fn query_config(deps: &MockDeps, env: &Env) -> ConfigResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Config {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_status(deps: &MockDeps, env: &Env) -> StatusResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Status {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_native_price(deps: &MockDeps, env: &Env, count: u32) -> PriceResponse {
        let res = query(
            deps.as_ref(),
            env.clone(),
            QueryMsg::NativePriceForTokens { count },
        ).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_balance(deps: &MockDeps, env: &Env, address: &str) -> u32 {
        let res = query(
            deps.as_ref(),
            env.clone(),
            QueryMsg::Balance { address: address.to_string() },
        ).unwrap();
        let balance: BalanceResponse = from_json(&res).unwrap();
        balance.balance
    }

    pub fn query_tokens(deps: &MockDeps, env: &Env, owner: &str, start_after: Option<u32>) -> Vec<u32> {
        let res = query(
            deps.as_ref(),
            env.clone(),
            QueryMsg::Tokens {
                owner: owner.to_string(),
                start_after,
                limit: None,
            },
        ).unwrap();
        let tokens: TokensResponse = from_json(&res).unwrap();
        tokens.tokens
    }

    pub fn query_token_uri(deps: &MockDeps, env: &Env, token_id: u32) -> cosmwasm_std::StdResult<String> {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::TokenUri { token_id })?;
        let uri: TokenUriResponse = from_json(&res)?;
        Ok(uri.uri)
    }
}
