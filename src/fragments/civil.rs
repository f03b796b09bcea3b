use super::{Fragment, Pattern};
use crate::models::question::QuestionType::*;

pub(super) const PATTERNS: &[Pattern] = &[
    Pattern::new("Structural Loads", Conceptual, 3, "Explain how dead, live and environmental loads combine for {context}, given {constraint}, and which combination governs during {scenario}."),
    Pattern::new("Structural Loads", Design, 6, "Size the primary beams for {context} so they satisfy {constraint} and keep deflection acceptable during {scenario}."),
    Pattern::new("Structural Loads", Debugging, 7, "Cracks appear in the transfer slab of {context} after {scenario}. How would you determine the cause, keeping {constraint} in mind?"),
    Pattern::new("Structural Loads", Optimization, 8, "Under {constraint}, how would you reduce the steel tonnage of {context} without losing capacity during {scenario}?"),
    Pattern::new("Structural Loads", System, 5, "Trace the complete load path through {context} during {scenario} and show where {constraint} limits your options."),
    Pattern::new("Seismic Design", Conceptual, 6, "What does ductility buy you in {context} during {scenario}, and how does {constraint} change the detailing?"),
    Pattern::new("Seismic Design", Design, 8, "Design a lateral-force-resisting system for {context} that meets {constraint} and stays serviceable after {scenario}."),
    Pattern::new("Seismic Design", Architecture, 9, "Would you choose base isolation, viscous dampers or a stiffer frame for {context}? Defend the choice against {constraint} and {scenario}."),
    Pattern::new("Seismic Design", Security, 7, "During {scenario}, how would you protect the critical non-structural systems of {context} while respecting {constraint}?"),
    Pattern::new("Seismic Design", Coding, 7, "Write a response-spectrum routine that checks the storey drift of {context} under {constraint}, and explain how you would validate it against {scenario}."),
    Pattern::new("Geotechnical", Conceptual, 4, "Explain how consolidation settlement develops beneath {context}, why {constraint} matters, and what changes during {scenario}."),
    Pattern::new("Geotechnical", Design, 6, "Select and size the foundation system for {context} given {constraint}, planning for {scenario}."),
    Pattern::new("Geotechnical", Debugging, 8, "After {scenario}, the retaining wall beside {context} is tilting. How would you investigate while honouring {constraint}?"),
    Pattern::new("Geotechnical", Optimization, 7, "How would you cut the piling cost for {context} under {constraint} without increasing the risk during {scenario}?"),
    Pattern::new("Geotechnical", Scalability, 6, "Plan a ground-improvement programme that scales from one block of {context} to the whole site, through {scenario} and within {constraint}."),
    Pattern::new("Hydraulics", Conceptual, 3, "Explain how the rational method estimates peak runoff for {context}, where {constraint} breaks its assumptions, and how {scenario} changes the answer."),
    Pattern::new("Hydraulics", Design, 5, "Design the stormwater drainage network for {context} to cope with {scenario} while meeting {constraint}."),
    Pattern::new("Hydraulics", System, 7, "Model how {context} interacts with the surrounding catchment during {scenario}, under {constraint}."),
    Pattern::new("Hydraulics", Debugging, 6, "Culverts under {context} keep surcharging during {scenario}. How would you find the bottleneck given {constraint}?"),
    Pattern::new("Hydraulics", Optimization, 8, "With {constraint}, how would you reduce pumping energy for {context} while staying resilient to {scenario}?"),
    Pattern::new("Transportation", Design, 5, "Lay out the junctions and signal phasing around {context} to handle {scenario} within {constraint}."),
    Pattern::new("Transportation", Scalability, 7, "How would you expand the road capacity serving {context} to absorb {scenario} while respecting {constraint}?"),
    Pattern::new("Transportation", Conceptual, 4, "What does level of service mean for the streets around {context}, and how do {constraint} and {scenario} distort it?"),
    Pattern::new("Transportation", Behavioral, 4, "Tell me how you would present a contested traffic plan for {context} to residents before {scenario}, given {constraint}."),
    Pattern::new("Transportation", Architecture, 8, "Set out a multimodal transport strategy for {context} that satisfies {constraint} and recovers quickly from {scenario}."),
    Pattern::new("Construction", Behavioral, 5, "Describe how you would handle a contractor dispute on {context} during {scenario} when {constraint} limits your leverage."),
    Pattern::new("Construction", Design, 6, "Plan the temporary works and sequencing for {context} under {constraint}, allowing for {scenario}."),
    Pattern::new("Construction", Debugging, 5, "Concrete cylinder results for {context} fail after {scenario}. How would you trace the cause, given {constraint}?"),
    Pattern::new("Construction", Optimization, 6, "How would you compress the programme for {context} under {constraint} without creating new risks during {scenario}?"),
    Pattern::new("Construction", Security, 4, "During {scenario}, how would you keep the public and the workforce safe around {context} under {constraint}?"),
    Pattern::new("Bridges", Conceptual, 5, "Explain how a cable-stayed deck carries load in {context}, how {constraint} affects the cable layout, and what governs during {scenario}."),
    Pattern::new("Bridges", Design, 8, "Design the bearings and expansion joints for {context} to accommodate {scenario} within {constraint}."),
    Pattern::new("Bridges", System, 7, "Set up a structural health monitoring system for {context} that flags damage during {scenario} and stays within {constraint}."),
    Pattern::new("Bridges", Debugging, 7, "Unexpected vibration appears on {context} during {scenario}. How would you diagnose it under {constraint}?"),
    Pattern::new("Bridges", Coding, 6, "Write an influence-line calculator for {context} that handles {constraint}, and show how you would test it against {scenario}."),
    Pattern::new("Environmental", Conceptual, 3, "Explain how an environmental impact assessment shapes {context}, why {constraint} matters, and how {scenario} must be addressed."),
    Pattern::new("Environmental", Design, 6, "Design a wastewater treatment train for {context} that meets {constraint} and keeps running through {scenario}."),
    Pattern::new("Environmental", Security, 7, "How would you protect groundwater near {context} from contamination during {scenario} while meeting {constraint}?"),
    Pattern::new("Environmental", Behavioral, 5, "Tell me how you would negotiate with regulators over {context} after {scenario} when {constraint} is non-negotiable."),
    Pattern::new("Environmental", Scalability, 8, "How would you scale a sustainable drainage approach from one street of {context} to a district, under {constraint} and through {scenario}?"),
];

pub(super) const CONTEXTS: &[Fragment] = &[
    Fragment::new("Buildings", 6, "a 40-storey residential tower"),
    Fragment::new("Buildings", 5, "a hospital extension"),
    Fragment::new("Buildings", 4, "a school gymnasium"),
    Fragment::new("Buildings", 7, "a stadium roof"),
    Fragment::new("Buildings", 5, "a multi-level car park"),
    Fragment::new("Buildings", 6, "a mixed-use podium development"),
    Fragment::new("Bridges", 8, "a cable-stayed river crossing"),
    Fragment::new("Bridges", 5, "a pedestrian footbridge"),
    Fragment::new("Bridges", 7, "a railway viaduct"),
    Fragment::new("Bridges", 6, "a highway overpass"),
    Fragment::new("Ground", 7, "a deep basement excavation"),
    Fragment::new("Ground", 8, "a metro tunnel"),
    Fragment::new("Ground", 6, "a hillside housing estate"),
    Fragment::new("Ground", 7, "an earth embankment dam"),
    Fragment::new("Water", 6, "a coastal sea wall"),
    Fragment::new("Water", 5, "an urban stormwater network"),
    Fragment::new("Water", 6, "a water treatment plant"),
    Fragment::new("Water", 4, "a rural irrigation canal"),
    Fragment::new("Transport", 5, "a busy urban intersection"),
    Fragment::new("Transport", 6, "an airport runway"),
    Fragment::new("Transport", 7, "a freight port terminal"),
    Fragment::new("Transport", 5, "a bus rapid transit corridor"),
    Fragment::new("Transport", 4, "a cycle-lane network"),
    Fragment::new("Industrial", 6, "a warehouse distribution hub"),
    Fragment::new("Industrial", 7, "a wind-farm access road"),
    Fragment::new("Industrial", 6, "a solar farm foundation array"),
    Fragment::new("Heritage", 7, "a listed masonry church"),
    Fragment::new("Heritage", 6, "a 19th-century warehouse conversion"),
    Fragment::new("Heritage", 5, "a historic town-centre pavement"),
    Fragment::new("Industrial", 8, "a landfill containment cell"),
];

pub(super) const CONSTRAINTS: &[Fragment] = &[
    Fragment::new("Codes", 6, "Eurocode 8 seismic provisions"),
    Fragment::new("Codes", 5, "ASCE 7 load combinations"),
    Fragment::new("Codes", 6, "ACI 318 detailing rules"),
    Fragment::new("Codes", 7, "AASHTO LRFD bridge criteria"),
    Fragment::new("Budget", 4, "a fixed-price contract"),
    Fragment::new("Budget", 5, "a 15% cost-reduction target"),
    Fragment::new("Budget", 3, "a limited public grant"),
    Fragment::new("Schedule", 5, "an 18-month delivery window"),
    Fragment::new("Schedule", 6, "night-time-only possessions"),
    Fragment::new("Schedule", 4, "a winter construction season"),
    Fragment::new("Site", 7, "soft marine clay"),
    Fragment::new("Site", 6, "a high water table"),
    Fragment::new("Site", 7, "an adjacent live railway"),
    Fragment::new("Site", 5, "restricted crane access"),
    Fragment::new("Site", 6, "contaminated made ground"),
    Fragment::new("Environment", 6, "a net-zero embodied carbon goal"),
    Fragment::new("Environment", 5, "protected wetland habitat"),
    Fragment::new("Environment", 4, "strict noise limits"),
    Fragment::new("Environment", 5, "a 100-year design life"),
    Fragment::new("Materials", 5, "locally sourced timber only"),
    Fragment::new("Materials", 6, "recycled aggregate concrete"),
    Fragment::new("Materials", 7, "weathering steel sections"),
    Fragment::new("Stakeholders", 4, "heritage conservation approval"),
    Fragment::new("Stakeholders", 5, "continuous public access"),
    Fragment::new("Stakeholders", 6, "a third-party utility corridor"),
    Fragment::new("Performance", 7, "a 1-in-2500-year earthquake"),
    Fragment::new("Performance", 6, "a span-to-depth limit of 20"),
    Fragment::new("Performance", 5, "a 25 mm settlement limit"),
    Fragment::new("Performance", 6, "fire resistance of 120 minutes"),
    Fragment::new("Performance", 5, "a maximum gradient of 5%"),
];

pub(super) const SCENARIOS: &[Fragment] = &[
    Fragment::new("Hazard", 8, "a magnitude 7 earthquake"),
    Fragment::new("Hazard", 7, "a 100-year flood"),
    Fragment::new("Hazard", 6, "a hurricane-force windstorm"),
    Fragment::new("Hazard", 7, "a landslide upslope"),
    Fragment::new("Hazard", 6, "a prolonged drought"),
    Fragment::new("Hazard", 7, "a storm surge"),
    Fragment::new("Hazard", 5, "a heavy snow load event"),
    Fragment::new("Accident", 8, "a vehicle impact on a pier"),
    Fragment::new("Accident", 7, "a fire on the lower floors"),
    Fragment::new("Accident", 6, "a burst water main"),
    Fragment::new("Accident", 8, "a crane collapse nearby"),
    Fragment::new("Deterioration", 6, "chloride-induced corrosion"),
    Fragment::new("Deterioration", 5, "freeze-thaw damage"),
    Fragment::new("Deterioration", 6, "fatigue cracking at welds"),
    Fragment::new("Deterioration", 7, "alkali-silica reaction"),
    Fragment::new("Change", 5, "a change of use to heavier loading"),
    Fragment::new("Change", 4, "a late design change from the client"),
    Fragment::new("Change", 6, "an unexpected buried obstruction"),
    Fragment::new("Change", 5, "a utility diversion delay"),
    Fragment::new("Demand", 5, "peak holiday traffic"),
    Fragment::new("Demand", 6, "a major sporting event crowd"),
    Fragment::new("Demand", 4, "rapid population growth"),
    Fragment::new("Demand", 5, "a rise in heavy goods vehicles"),
    Fragment::new("Supply", 5, "a steel supply shortage"),
    Fragment::new("Supply", 4, "a labour strike"),
    Fragment::new("Supply", 5, "a concrete batching plant failure"),
    Fragment::new("Oversight", 6, "a regulatory safety inspection"),
    Fragment::new("Oversight", 5, "a public planning inquiry"),
    Fragment::new("Oversight", 7, "a post-incident forensic review"),
    Fragment::new("Oversight", 6, "an insurer risk audit"),
];
