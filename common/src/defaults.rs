//! Built-in server and domain tables used when no list files are supplied.
//!
//! The tables are plain constant data. Callers turn them into owned values once
//! at startup with [`default_servers`] and [`default_domains`].

use crate::models::{Category, DomainEntry, Server};

/// Public resolvers probed by default, as `(address, label)` pairs.
pub const DEFAULT_SERVERS: &[(&str, &str)] = &[
    ("212.154.100.18", "TR - Türknet"),
    ("193.192.98.8", "TR - Türknet Secondary"),
    ("1.1.1.1", "AU - Cloudflare"),
    ("1.0.0.1", "AU - Cloudflare Secondary"),
    ("45.90.28.230", "US - NextDNS"),
    ("45.90.30.230", "US - NextDNS Secondary"),
    ("8.8.4.4", "US - Google Public DNS"),
    ("8.8.8.8", "US - Google Public DNS Secondary"),
    ("92.45.23.168", "TR - deik.org.tr"),
    ("195.244.44.45", "TR - CubeDNS - Netinternet"),
    ("195.244.44.44", "TR - CubeDNS - Netinternet Secondary"),
    ("9.9.9.9", "US - Quad9 Security"),
    ("149.112.112.112", "US - Quad9 Security Secondary"),
    ("149.112.112.10", "US - Quad9 No Security"),
    ("9.9.9.10", "US - Quad9 No Security Secondary"),
    ("156.154.71.1", "US - Neustar 1"),
    ("156.154.70.1", "US - Neustar 1 Secondary"),
    ("209.244.0.3", "US - Level 3 - A"),
    ("209.244.0.4", "US - Level 3 - A Secondary"),
    ("4.2.2.1", "US - Level 3 - B"),
    ("4.2.2.2", "US - Level 3 - B Secondary"),
    ("4.2.2.3", "US - Level 3 - C"),
    ("4.2.2.4", "US - Level 3 - C Secondary"),
    ("4.2.2.5", "US - Level 3 - D"),
    ("4.2.2.6", "US - Level 3 - D Secondary"),
    ("204.69.234.1", "US - UltraDNS"),
    ("204.74.101.1", "US - UltraDNS Secondary"),
    ("156.154.70.5", "US - Neustar 2"),
    ("156.154.71.5", "US - Neustar 2 Secondary"),
    ("199.85.126.10", "US - Norton ConnectSafe"),
    ("199.85.127.10", "US - Norton ConnectSafe Secondary"),
    ("198.153.192.1", "US - Norton DNS"),
    ("198.153.194.1", "US - Norton DNS Secondary"),
    ("64.6.65.6", "US - VeriSign Public DNS"),
    ("64.6.64.6", "US - VeriSign Public DNS Secondary"),
    ("156.154.71.22", "US - Comodo"),
    ("156.154.70.22", "US - Comodo Secondary"),
    ("208.67.220.220", "US - OpenDNS"),
    ("208.67.222.222", "US - OpenDNS Secondary"),
    ("208.67.222.220", "US - OpenDNS - 2"),
    ("195.46.39.39", "RU - Safe DNS"),
    ("195.46.39.40", "RU - Safe DNS Secondary"),
    ("176.9.1.117", "DE - DNSForge - Normal"),
    ("176.9.93.198", "DE - DNSForge - Normal Secondary"),
    ("49.12.223.2", "DE - DNSForge - Clean"),
    ("49.12.43.208", "DE - DNSForge - Clean Secondary"),
    ("195.92.195.94", "GB - Orange DNS"),
    ("195.92.195.95", "GB - Orange DNS Secondary"),
    ("49.12.222.213", "DE - DNSForge - Hard"),
    ("88.198.122.154", "DE - DNSForge - Hard Secondary"),
    ("138.199.149.249", "DE - DNSForge - Blank"),
    ("78.47.71.194", "DE - DNSForge - Blank Secondary"),
    ("163.172.141.219", "90dns - FR - US"),
    ("207.246.121.77", "90dns - FR - US Secondary"),
    ("185.228.169.9", "CleanBrowsing"),
    ("185.228.168.9", "CleanBrowsing Secondary"),
    ("8.26.56.26", "US - Comodo Secure"),
    ("8.20.247.20", "US - Comodo Secure Secondary"),
    ("8.20.247.10", "US - Comodo Secure Filtering"),
    ("8.26.56.10", "US - Comodo Secure Filtering Secondary"),
    ("212.23.8.1", "GB - Zen Internet"),
    ("212.23.3.1", "GB - Zen Internet Secondary"),
    ("94.140.15.15", "RU - AdGuard DNS"),
    ("94.140.14.14", "RU - AdGuard DNS Secondary"),
    ("74.82.42.42", "US - Hurricane Electric"),
    ("77.88.8.1", "RU - Yandex"),
    ("77.88.8.8", "RU - Yandex Secondary"),
    ("205.171.2.65", "US - Qwest"),
    ("205.171.3.65", "US - Qwest Secondary"),
    ("80.80.80.80", "NL - Freenom World"),
    ("80.80.81.81", "NL - Freenom World Secondary"),
    ("216.146.36.36", "US - Dyn"),
    ("216.146.35.35", "US - Dyn Secondary"),
    ("95.216.149.205", "LavaDNS - dns.lavate.ch"),
    ("46.20.159.27", "TR - Dora Telekom"),
    ("46.20.159.27", "TR - Dora Telekom Secondary"),
    ("76.76.19.19", "Alternate DNS"),
    ("76.223.122.150", "Alternate DNS Secondary"),
    ("89.233.43.71", "DK - Censurfridns"),
    ("91.239.100.100", "DK - Censurfridns Secondary"),
    ("80.67.169.12", "FR - FDN"),
    ("80.67.169.40", "FR - FDN Secondary"),
    ("199.2.252.10", "US - Sprintlink"),
    ("204.97.212.10", "US - Sprintlink Secondary"),
    ("84.200.69.80", "DE - DNS WATCH"),
    ("84.200.70.40", "DE - DNS WATCH Secondary"),
    ("204.97.212.10", "US - Sprint"),
];

/// Domains probed by default, grouped by category.
pub const DEFAULT_DOMAINS: &[(&str, Category)] = &[
    ("google.com", Category::General),
    ("youtube.com", Category::General),
    ("facebook.com", Category::General),
    ("instagram.com", Category::General),
    ("twitter.com", Category::General),
    ("x.com", Category::General),
    ("discord.com", Category::General),
    ("github.com", Category::General),
    ("stackoverflow.com", Category::General),
    ("reddit.com", Category::General),
    ("netflix.com", Category::General),
    ("amazon.com", Category::General),
    ("microsoft.com", Category::General),
    ("apple.com", Category::General),
    ("cloudflare.com", Category::General),
    ("wikipedia.org", Category::General),
    ("yandex.com", Category::General),
    ("baidu.com", Category::General),
    ("pastebin.com", Category::Other),
    ("roblox.com", Category::Other),
    ("pornhub.com", Category::Adult),
    ("xvideos.com", Category::Adult),
    ("googleadservices.com", Category::AdServer),
    ("googlesyndication.com", Category::AdServer),
    ("googletagmanager.com", Category::AdServer),
    ("doubleclick.net", Category::AdServer),
    ("google-analytics.com", Category::AdServer),
    ("adsystem.amazon.com", Category::AdServer),
    ("amazon-adsystem.com", Category::AdServer),
    ("connect.facebook.net", Category::AdServer),
    ("ads.linkedin.com", Category::AdServer),
    ("analytics.twitter.com", Category::AdServer),
    ("ads.twitter.com", Category::AdServer),
    ("ads.yahoo.com", Category::AdServer),
    ("advertising.com", Category::AdServer),
    ("adsystem.microsoft.com", Category::AdServer),
    ("bat.bing.com", Category::AdServer),
];

pub fn default_servers() -> Vec<Server> {
    DEFAULT_SERVERS
        .iter()
        .map(|(address, label)| Server::new(*address).with_label(*label))
        .collect()
}

pub fn default_domains() -> Vec<DomainEntry> {
    DEFAULT_DOMAINS
        .iter()
        .map(|(domain, category)| DomainEntry::new(*domain, *category))
        .collect()
}
