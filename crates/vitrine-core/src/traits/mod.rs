//! Fetch traits implemented by the infrastructure layer

mod fetch;

pub use fetch::{
    ChannelInfo, FetchError, FetchResult, MemberDirectory, MessageSource, SourceEmbed,
    SourceMember, SourceMessage, SourceUser, UpstreamProbe,
};
