//! Shared fixtures for integration tests.

/// A small config with a wildcard block and one host.
pub const SIMPLE_CONFIG: &str = "\
Host *
    IdentitiesOnly yes

Host netscaler
    hostname 1.1.1.1
    port 3367

";

/// A realistic config exercising comments, preamble directives, tabs,
/// multi-pattern blocks, repeated keys, and `=` separators.
pub const FULL_CONFIG: &str = "\
### defaults for all ##
ServerAliveInterval 60
ServerAliveCountMax 30

## override as per host ##
Host server1
    HostName server1.cyberciti.biz
    User nixcraft
    Port 4242
    IdentityFile /nfs/shared/users/nixcraft/keys/server1/id_rsa
    IdentityFile /tmp/x.rsa

## Home nas server ##
Host nas01
    HostName 192.168.1.100
    User root
    IdentityFile ~/.ssh/nas01.key

## Login to internal lan server via gateway ##
Host uk.gw.lan uk.lan
    HostName 192.168.0.251
    User nixcraft
    ProxyCommand  ssh nixcraft@gateway.uk.cyberciti.biz nc %h %p 2> /dev/null

## Our Us Proxy Server ##
Host proxyus
\tHostName vps1.cyberciti.biz
\tUser breakfree
\tLocalForward=3128 127.0.0.1:3128
";

/// Parses a fixture, panicking on failure.
pub fn document(text: &str) -> squall::ConfigDocument {
    squall::parse(text).expect("fixture must parse")
}
