use super::{Fragment, Pattern};
use crate::models::question::QuestionType::*;

pub(super) const PATTERNS: &[Pattern] = &[
    Pattern::new("Data Structures", Conceptual, 3, "Explain how you would choose between a hash map and a balanced tree for {context}, given {constraint}, and what changes during {scenario}."),
    Pattern::new("Data Structures", Coding, 6, "Implement an LRU cache for {context} that honours {constraint}; describe how it behaves during {scenario}."),
    Pattern::new("Data Structures", Design, 7, "During {scenario}, {context} needs a probabilistic membership structure. Design one that respects {constraint}."),
    Pattern::new("Data Structures", Optimization, 8, "Under {constraint}, how would you shrink the memory footprint of the indexes behind {context} so they survive {scenario}?"),
    Pattern::new("Data Structures", Debugging, 5, "A priority queue inside {context} starts returning items out of order during {scenario}. Walk through your diagnosis, keeping {constraint} in mind."),
    Pattern::new("Algorithms", Coding, 5, "Write a function that deduplicates an event stream for {context} under {constraint}, and explain how it copes with {scenario}."),
    Pattern::new("Algorithms", Conceptual, 4, "Given {constraint}, when would you prefer dynamic programming over a greedy approach for scheduling work in {context}, especially during {scenario}?"),
    Pattern::new("Algorithms", Optimization, 7, "A shortest-path computation in {context} is too slow during {scenario}. How would you speed it up without violating {constraint}?"),
    Pattern::new("Algorithms", Coding, 8, "Implement consistent hashing for {context}; show how keys move during {scenario} and how the design respects {constraint}."),
    Pattern::new("Algorithms", Behavioral, 3, "Tell me about a time you replaced a brute-force algorithm in something like {context}. How did {constraint} shape the choice, and what happened during {scenario}?"),
    Pattern::new("Distributed Systems", System, 8, "Design a leader-election scheme for {context} that keeps working during {scenario} while honouring {constraint}."),
    Pattern::new("Distributed Systems", Conceptual, 6, "What does the CAP theorem imply for {context} during {scenario}, and how does {constraint} push you toward one side?"),
    Pattern::new("Distributed Systems", Architecture, 9, "Architect an event-sourced backbone for {context} that satisfies {constraint} and replays cleanly after {scenario}."),
    Pattern::new("Distributed Systems", Debugging, 7, "After {scenario}, replicas serving {context} disagree about the latest write. How do you find the cause while respecting {constraint}?"),
    Pattern::new("Distributed Systems", Scalability, 8, "How would you shard the state behind {context} so it keeps up with {scenario} and still meets {constraint}?"),
    Pattern::new("Databases", Design, 5, "Design the schema and indexes for {context}, keeping {constraint} in view and planning for {scenario}."),
    Pattern::new("Databases", Optimization, 6, "Queries backing {context} time out during {scenario}. Which plans, indexes or caches would you change, given {constraint}?"),
    Pattern::new("Databases", Conceptual, 4, "Compare snapshot isolation with serializable transactions for {context} under {constraint}. Which anomalies surface during {scenario}?"),
    Pattern::new("Databases", Scalability, 7, "Plan a zero-downtime migration of the primary database for {context} through {scenario} while honouring {constraint}."),
    Pattern::new("Databases", Debugging, 6, "Replication lag on the database behind {context} spikes during {scenario}. How would you investigate without breaking {constraint}?"),
    Pattern::new("Concurrency", Coding, 7, "Write a thread-safe bounded queue for {context}; it must respect {constraint} and degrade gracefully during {scenario}."),
    Pattern::new("Concurrency", Debugging, 8, "A race condition corrupts counters in {context} only during {scenario}. How do you reproduce and fix it under {constraint}?"),
    Pattern::new("Concurrency", Conceptual, 5, "Explain how async runtimes schedule work in {context}, why {constraint} matters, and what starves first during {scenario}."),
    Pattern::new("Concurrency", Design, 6, "Under {constraint}, design the back-pressure strategy for {context} so it stays responsive during {scenario}."),
    Pattern::new("Concurrency", Optimization, 9, "Lock contention caps throughput in {context} during {scenario}. How would you remove it without giving up {constraint}?"),
    Pattern::new("Security", Security, 6, "How would you secure {context} against credential stuffing during {scenario} while meeting {constraint}?"),
    Pattern::new("Security", Design, 7, "Design secrets management for {context} that satisfies {constraint} and survives {scenario}."),
    Pattern::new("Security", Security, 8, "During {scenario}, how would you detect and contain lateral movement inside {context} without breaking {constraint}?"),
    Pattern::new("Security", Conceptual, 3, "Explain the difference between authentication and authorization in {context}, and how {constraint} shapes both during {scenario}."),
    Pattern::new("Security", Behavioral, 4, "Describe how you would convince a team running {context} to fix a vulnerability before {scenario}, given {constraint}."),
    Pattern::new("Reliability", System, 7, "Define the SLOs and alerting for {context}, accounting for {constraint} and the failure modes of {scenario}."),
    Pattern::new("Reliability", Debugging, 6, "Memory grows without bound in {context} after {scenario}. Walk through how you would find the leak under {constraint}."),
    Pattern::new("Reliability", Architecture, 8, "Architect multi-region failover for {context} so that {scenario} causes no data loss and {constraint} still holds."),
    Pattern::new("Reliability", Behavioral, 5, "Tell me how you would lead the on-call response for {context} during {scenario} when {constraint} limits your options."),
    Pattern::new("Reliability", Scalability, 6, "How would you load-test {context} to prove it survives {scenario} within {constraint}?"),
    Pattern::new("API Design", Design, 4, "Design a versioned public API for {context} that honours {constraint} and stays usable during {scenario}."),
    Pattern::new("API Design", Architecture, 7, "Would you put a gateway, a service mesh or neither in front of {context}? Justify it against {constraint} and {scenario}."),
    Pattern::new("API Design", Coding, 4, "Write an idempotent request handler for {context} that tolerates retries during {scenario} and respects {constraint}."),
    Pattern::new("API Design", Scalability, 5, "How would you rate-limit clients of {context} fairly during {scenario} under {constraint}?"),
    Pattern::new("API Design", Conceptual, 2, "What makes a REST endpoint in {context} idempotent, and why does it matter for {constraint} during {scenario}?"),
];

pub(super) const CONTEXTS: &[Fragment] = &[
    Fragment::new("Commerce", 4, "a high-traffic checkout service"),
    Fragment::new("Commerce", 5, "an inventory reservation system"),
    Fragment::new("Commerce", 6, "a marketplace search backend"),
    Fragment::new("Finance", 7, "a payments ledger"),
    Fragment::new("Finance", 8, "a low-latency trading gateway"),
    Fragment::new("Finance", 6, "a fraud-scoring pipeline"),
    Fragment::new("Media", 5, "a video streaming platform"),
    Fragment::new("Media", 4, "a photo-sharing feed"),
    Fragment::new("Media", 6, "a live chat service"),
    Fragment::new("Data", 6, "a clickstream analytics pipeline"),
    Fragment::new("Data", 7, "a feature store for machine learning"),
    Fragment::new("Data", 5, "a nightly ETL warehouse job"),
    Fragment::new("Infrastructure", 7, "a multi-tenant Kubernetes platform"),
    Fragment::new("Infrastructure", 6, "a CI/CD build farm"),
    Fragment::new("Infrastructure", 8, "a global DNS control plane"),
    Fragment::new("Mobile", 3, "an offline-first mobile notes app"),
    Fragment::new("Mobile", 4, "a ride-hailing dispatch app"),
    Fragment::new("Mobile", 5, "a push-notification fan-out service"),
    Fragment::new("Health", 6, "an electronic health records portal"),
    Fragment::new("Health", 5, "a telemedicine booking system"),
    Fragment::new("Edge", 7, "an IoT telemetry ingestion service"),
    Fragment::new("Edge", 8, "a CDN edge cache"),
    Fragment::new("Edge", 6, "a smart-home device hub"),
    Fragment::new("Collaboration", 7, "a collaborative document editor"),
    Fragment::new("Collaboration", 4, "a team calendar service"),
    Fragment::new("Collaboration", 5, "an issue-tracking tool"),
    Fragment::new("Gaming", 7, "a multiplayer game matchmaking service"),
    Fragment::new("Gaming", 6, "a real-time leaderboard"),
    Fragment::new("Identity", 6, "a single sign-on provider"),
    Fragment::new("Identity", 3, "a URL-shortening service"),
];

pub(super) const CONSTRAINTS: &[Fragment] = &[
    Fragment::new("Latency", 7, "a 50 ms p99 latency budget"),
    Fragment::new("Latency", 5, "a 200 ms page-load target"),
    Fragment::new("Latency", 8, "sub-millisecond tail latency"),
    Fragment::new("Availability", 8, "a 99.99% availability target"),
    Fragment::new("Availability", 6, "zero-downtime deployments"),
    Fragment::new("Availability", 5, "a five-minute recovery time objective"),
    Fragment::new("Consistency", 8, "strict serializability"),
    Fragment::new("Consistency", 6, "read-your-writes consistency"),
    Fragment::new("Consistency", 4, "eventual consistency across regions"),
    Fragment::new("Resources", 5, "a single 4 GB memory node"),
    Fragment::new("Resources", 4, "a fixed monthly cloud budget"),
    Fragment::new("Resources", 6, "limited bandwidth to remote sites"),
    Fragment::new("Resources", 3, "a team of two engineers"),
    Fragment::new("Compliance", 6, "GDPR data-residency rules"),
    Fragment::new("Compliance", 7, "PCI DSS scope limits"),
    Fragment::new("Compliance", 6, "HIPAA audit logging"),
    Fragment::new("Compliance", 7, "SOX change-control requirements"),
    Fragment::new("Compatibility", 5, "backward compatibility with v1 clients"),
    Fragment::new("Compatibility", 6, "a legacy mainframe integration"),
    Fragment::new("Compatibility", 4, "a frozen database schema"),
    Fragment::new("Scale", 7, "ten million daily active users"),
    Fragment::new("Scale", 8, "one billion events per day"),
    Fragment::new("Scale", 6, "petabyte-scale storage"),
    Fragment::new("Security", 7, "a zero-trust network policy"),
    Fragment::new("Security", 8, "an air-gapped deployment"),
    Fragment::new("Security", 5, "mandatory end-to-end encryption"),
    Fragment::new("Operations", 4, "no dedicated operations team"),
    Fragment::new("Operations", 5, "a weekly release train"),
    Fragment::new("Operations", 3, "open-source-only tooling"),
    Fragment::new("Operations", 6, "strict multi-tenancy isolation"),
];

pub(super) const SCENARIOS: &[Fragment] = &[
    Fragment::new("Load", 6, "a Black Friday traffic spike"),
    Fragment::new("Load", 7, "a viral content surge"),
    Fragment::new("Load", 5, "a flash sale"),
    Fragment::new("Load", 4, "a breaking-news event"),
    Fragment::new("Failure", 8, "a regional network partition"),
    Fragment::new("Failure", 7, "a primary database outage"),
    Fragment::new("Failure", 6, "a third-party API failure"),
    Fragment::new("Failure", 5, "a botched deployment rollback"),
    Fragment::new("Failure", 7, "silent data corruption"),
    Fragment::new("Failure", 6, "a cloud provider zone outage"),
    Fragment::new("Security", 8, "an active DDoS attack"),
    Fragment::new("Security", 9, "a ransomware incident"),
    Fragment::new("Security", 7, "a leaked API key"),
    Fragment::new("Security", 6, "a dependency supply-chain alert"),
    Fragment::new("Change", 5, "a major version upgrade"),
    Fragment::new("Change", 6, "an infrastructure migration"),
    Fragment::new("Change", 4, "shifting product requirements"),
    Fragment::new("Change", 5, "a schema change in production"),
    Fragment::new("Organisation", 3, "rapid team growth"),
    Fragment::new("Organisation", 4, "a tight launch deadline"),
    Fragment::new("Organisation", 5, "a hand-off between distributed teams"),
    Fragment::new("Organisation", 4, "accumulated technical debt"),
    Fragment::new("Operations", 6, "a midnight on-call page"),
    Fragment::new("Operations", 5, "gradual performance degradation"),
    Fragment::new("Operations", 7, "a clock skew incident"),
    Fragment::new("Operations", 6, "a runaway cloud bill"),
    Fragment::new("Regulation", 6, "a regulatory audit"),
    Fragment::new("Regulation", 7, "a data-subject deletion request"),
    Fragment::new("Regulation", 5, "a vendor contract termination"),
    Fragment::new("Regulation", 6, "a legal hold on user data"),
];
