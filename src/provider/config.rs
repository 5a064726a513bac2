pub mod retry {
    use std::time::Duration;
    pub const RETRY_COUNT: u32 = 3;
    pub const RETRY_DELAY: Duration = Duration::from_secs(5);
}
pub mod gate {
    use std::time::Duration;
    pub const REQUEST_DELAY: Duration = Duration::from_secs(2);
}
pub mod page {
    pub const DEFAULT_START: usize = 0;
    pub const DEFAULT_STOP: usize = 4096;
    pub const DEFAULT_PAGE_SIZE: usize = 100;
}
pub mod remote {
    pub const BASE_URL: &str = "https://leetcode.com";
    pub const GRAPHQL_URL: &str = "https://leetcode.com/graphql";
    pub const PROBLEM_URL_PREFIX: &str = "https://leetcode.com/problems/";
}
pub mod session {
    pub const SESSION_ENV: &str = "LEETCODE_SESSION_ID";
    pub const VERBOSE: bool = false;
}
