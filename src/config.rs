use std::time::Duration;

/// IAM endpoint for the standard AWS partition.
const GLOBAL_IAM_ENDPOINT: &str = "https://iam.amazonaws.com";

/// Known regions and their IAM endpoints.
const REGIONS: &[(&str, &str)] = &[
    ("us-east-1", GLOBAL_IAM_ENDPOINT),
    ("us-west-1", GLOBAL_IAM_ENDPOINT),
    ("us-west-2", GLOBAL_IAM_ENDPOINT),
    ("eu-west-1", GLOBAL_IAM_ENDPOINT),
    ("ap-southeast-1", GLOBAL_IAM_ENDPOINT),
    ("ap-southeast-2", GLOBAL_IAM_ENDPOINT),
    ("ap-northeast-1", GLOBAL_IAM_ENDPOINT),
    ("sa-east-1", GLOBAL_IAM_ENDPOINT),
    ("us-gov-west-1", "https://iam.us-gov.amazonaws.com"),
    ("cn-north-1", "https://iam.cn-north-1.amazonaws.com.cn"),
];

/// A region name paired with the IAM endpoint that serves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub iam_endpoint: String,
}

impl Region {
    /// Looks up one of the built-in regions by name.
    pub fn from_name(name: &str) -> Option<Self> {
        REGIONS
            .iter()
            .find(|(region, _)| *region == name)
            .map(|(region, endpoint)| Self::custom(*region, *endpoint))
    }

    /// Creates a region with an arbitrary endpoint, e.g. a local mock server.
    pub fn custom(name: impl Into<String>, iam_endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iam_endpoint: iam_endpoint.into(),
        }
    }

    /// `us-east-1`, the home region of IAM.
    pub fn us_east_1() -> Self {
        Self::custom("us-east-1", GLOBAL_IAM_ENDPOINT)
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::us_east_1()
    }
}

/// HMAC algorithm used for Signature Version 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureMethod {
    HmacSha1,
    #[default]
    HmacSha256,
}

impl SignatureMethod {
    /// Value sent as the `SignatureMethod` parameter.
    pub fn as_method_str(self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => "HmacSHA1",
            SignatureMethod::HmacSha256 => "HmacSHA256",
        }
    }

    /// Value sent as the `SignatureVersion` parameter.
    pub fn as_version_str(self) -> &'static str {
        "2"
    }
}

/// Configuration for the IAM client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Region, and with it the IAM endpoint requests are sent to.
    pub region: Region,

    /// HTTP request timeout. `None` leaves the HTTP client's default in place.
    pub timeout: Option<Duration>,

    /// HMAC algorithm used to sign requests.
    pub signature_method: SignatureMethod,

    /// API version (always "2010-05-08").
    pub(crate) api_version: &'static str,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            timeout: None,
            signature_method: SignatureMethod::default(),
            api_version: "2010-05-08",
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given region.
    pub fn new(region: Region) -> Self {
        Self::default().with_region(region)
    }

    /// Sets the region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Keeps the region name but sends requests to a custom endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.region.iam_endpoint = endpoint.into();
        self
    }

    /// Sets the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the signing algorithm.
    pub fn with_signature_method(mut self, method: SignatureMethod) -> Self {
        self.signature_method = method;
        self
    }
}
